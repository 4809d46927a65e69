//! JD endpoints and the fixed browser-mimicking header set.
//!
//! All URLs and form parameters here replay what the m.jd.com web client sends;
//! none of them are documented upstream.

/// Shared client-action API. The operation is selected by the `functionId`
/// form field.
pub const ACTION_API: &str = "https://api.m.jd.com/client.action";

/// Simplified sign-in trigger, fired as a GET before the canonical POST.
pub const SIMPLE_SIGN_URL: &str =
    "https://api.m.jd.com/client.action?functionId=signBeanIndex&appid=ld";

/// Bean feature landing page, used as the warm-up target.
pub const SIGN_INDEX_PAGE: &str = "https://bean.m.jd.com/bean/signIndex.action";

/// Account home page, probed for authentication state.
pub const ACCOUNT_HOME: &str = "https://home.m.jd.com/myJd/newhome.action";

/// Dedicated login-check endpoint.
pub const ISLOGIN: &str = "https://plogin.m.jd.com/cgi-bin/ml/islogin";

pub const APP_ID: &str = "ld";
pub const FN_QUERY_BEAN_INDEX: &str = "queryBeanIndex";
pub const FN_SIGN_BEAN_INDEX: &str = "signBeanIndex";
pub const FN_SIGN_BEAN_ACT: &str = "signBeanAct";

/// Referer/Origin pair matching the subdomain a call pretends to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    pub referer: &'static str,
    pub origin: &'static str,
}

pub const BEAN_PAGE: PageContext = PageContext {
    referer: "https://bean.m.jd.com/",
    origin: "https://bean.m.jd.com",
};

pub const HOME_PAGE: PageContext = PageContext {
    referer: "https://home.m.jd.com/",
    origin: "https://home.m.jd.com",
};

pub const H5_PAGE: PageContext = PageContext {
    referer: "https://h5.m.jd.com/",
    origin: "https://h5.m.jd.com",
};

/// Fixed header set sent on every request.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36 Edg/122.0.0.0",
    ),
    ("Accept", "application/json, text/plain, */*"),
    ("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8"),
    (
        "sec-ch-ua",
        "\"Chromium\";v=\"122\", \"Not(A:Brand\";v=\"24\", \"Microsoft Edge\";v=\"122\"",
    ),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
    ("sec-fetch-dest", "empty"),
    ("sec-fetch-mode", "cors"),
    ("sec-fetch-site", "same-site"),
];
