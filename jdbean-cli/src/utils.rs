use std::path::Path;

/// Resolve a cookie argument: when it names an existing file, read the file;
/// otherwise treat the argument itself as cookie text.
pub fn read_cookie_input(input: &str) -> std::io::Result<String> {
    let path = Path::new(input);
    if path.exists() {
        std::fs::read_to_string(path)
    } else {
        Ok(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_passes_through() {
        let text = read_cookie_input("pt_key=abc; pt_pin=u").unwrap();
        assert_eq!(text, "pt_key=abc; pt_pin=u");
    }

    #[test]
    fn existing_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        std::fs::write(&path, "pt_key=fromfile").unwrap();
        let text = read_cookie_input(path.to_str().unwrap()).unwrap();
        assert_eq!(text, "pt_key=fromfile");
    }
}
