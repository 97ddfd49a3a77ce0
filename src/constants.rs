pub mod header {
    pub const COOKIE: &str = "Cookie";
    pub const REFERER: &str = "Referer";
}

pub mod scheme {
    pub const HTTP: &str = "http";
    pub const HTTPS: &str = "https";
}

pub mod net_error {
    pub const OK: i32 = 0;
    pub const ERR_ABORTED: i32 = -3;
}

/// Literals backing the built-in rule table.
pub mod site {
    pub const FORBES_DOMAIN: &str = "forbes.com";
    pub const FORBES_EXTRA_COOKIES: &str =
        "forbes_ab=true; welcomeAd=true; adblock_session=Off; dailyWelcomeCookie=true";

    pub const TWITTER_MOBILE_HOST: &str = "mobile.twitter.com";
    pub const TWITTER_NOJS_ROUTER_PATH: &str = "/i/nojs_router";
}
