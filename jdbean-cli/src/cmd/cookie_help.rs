const HELP: &str = "\
How to capture JD cookies:

1. Open www.jd.com in your browser and log in.
2. Press F12 to open the developer tools, then:
   - go to the Application tab
   - under Cookies, select https://www.jd.com
   - select every row in the table (Ctrl+A) and copy it (Ctrl+C)
   - paste the copied table into cookies.txt
3. Run `jdbean run` (or `jdbean set-cookies cookies.txt`).

Notes:
- Make sure you are logged in and the table shows multiple cookie rows.
- Ideally the copied cookies include pt_key and pt_pin.
- If validation keeps failing, log in to JD again and re-capture.
";

pub fn print() {
    println!("{HELP}");
}
