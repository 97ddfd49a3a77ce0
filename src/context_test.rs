use super::*;

struct HostRequest {
    url: &'static str,
    referrer: Option<&'static str>,
    site_for_cookies: Option<&'static str>,
}

impl UrlRequest for HostRequest {
    fn url(&self) -> &str {
        self.url
    }

    fn referrer(&self) -> Option<&str> {
        self.referrer
    }

    fn site_for_cookies(&self) -> Option<&str> {
        self.site_for_cookies
    }
}

mod new {
    use super::*;

    #[test]
    fn should_parse_all_components_when_valid() {
        // Arrange & Act
        let ctx = RequestContext::new(
            "https://digg.com/7",
            Some("https://hello.brianbondy.com/about"),
            Some("https://digg.com/"),
        )
        .expect("valid context");

        // Assert
        assert_eq!(ctx.url.as_str(), "https://digg.com/7");
        assert_eq!(
            ctx.referrer.as_ref().map(Url::as_str),
            Some("https://hello.brianbondy.com/about")
        );
        assert_eq!(
            ctx.site_for_cookies.as_ref().map(Url::as_str),
            Some("https://digg.com/")
        );
        assert_eq!(ctx.new_referrer, None);
        assert_eq!(ctx.new_url, None);
        assert_eq!(ctx.status, Status::Continue);
    }

    #[test]
    fn should_treat_empty_strings_as_absent() {
        // Arrange & Act
        let ctx = RequestContext::new("https://digg.com/7", Some(""), Some(""))
            .expect("valid context");

        // Assert
        assert_eq!(ctx.referrer, None);
        assert_eq!(ctx.site_for_cookies, None);
    }

    #[test]
    fn should_return_invalid_url_when_destination_unparseable() {
        // Arrange & Act
        let result = RequestContext::new("digg.com/7", None, None);

        // Assert
        assert!(matches!(
            result,
            Err(ContextError::InvalidUrl { input, source })
                if input == "digg.com/7" && source == url::ParseError::RelativeUrlWithoutBase
        ));
    }

    #[test]
    fn should_return_invalid_referrer_when_referrer_unparseable() {
        // Arrange & Act
        let result = RequestContext::new("https://digg.com/7", Some("https://"), None);

        // Assert
        assert!(matches!(result, Err(ContextError::InvalidReferrer { .. })));
    }

    #[test]
    fn should_return_invalid_site_for_cookies_when_unparseable() {
        // Arrange & Act
        let result = RequestContext::new("https://digg.com/7", None, Some("/relative"));

        // Assert
        assert!(matches!(
            result,
            Err(ContextError::InvalidSiteForCookies { .. })
        ));
    }
}

mod from_request {
    use super::*;

    #[test]
    fn should_snapshot_host_request() {
        // Arrange
        let request = HostRequest {
            url: "https://slashdot.org/5",
            referrer: Some("https://hello.brianbondy.com/about"),
            site_for_cookies: Some(
                "chrome-extension://aemmndcbldboiebfnladdacbdfmadadm/test.html",
            ),
        };

        // Act
        let ctx = RequestContext::from_request(&request).expect("valid context");

        // Assert
        assert_eq!(ctx.url.host_str(), Some("slashdot.org"));
        assert_eq!(
            ctx.site_for_cookies.as_ref().map(Url::scheme),
            Some("chrome-extension")
        );
    }
}

mod effective_referrer {
    use super::*;

    #[test]
    fn should_return_original_referrer_when_not_replaced() {
        // Arrange
        let ctx = RequestContext::new(
            "https://www.brianbondy.com/5",
            Some("https://hello.brianbondy.com/about"),
            None,
        )
        .expect("valid context");

        // Act & Assert
        assert_eq!(
            ctx.effective_referrer(),
            Some("https://hello.brianbondy.com/about")
        );
    }

    #[test]
    fn should_prefer_replacement_when_set() {
        // Arrange
        let mut ctx = RequestContext::new(
            "https://digg.com/7",
            Some("https://hello.brianbondy.com/about"),
            None,
        )
        .expect("valid context");
        ctx.new_referrer = Some("https://digg.com".into());

        // Act & Assert
        assert_eq!(ctx.effective_referrer(), Some("https://digg.com"));
    }

    #[test]
    fn should_return_none_without_referrer() {
        // Arrange
        let ctx = RequestContext::new("https://digg.com/7", None, None).expect("valid context");

        // Act & Assert
        assert_eq!(ctx.effective_referrer(), None);
    }
}
