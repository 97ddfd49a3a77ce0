use site_hacks_rs::constants::header;
use site_hacks_rs::{HeaderSet, RequestContext, SiteHacks, Status, UrlRequest};

/// Host request stand-in carrying what a browser request object exposes.
#[derive(Debug, Clone, Default)]
pub struct TestRequest {
    url: String,
    referrer: Option<String>,
    site_for_cookies: Option<String>,
    headers: HeaderSet,
}

impl UrlRequest for TestRequest {
    fn url(&self) -> &str {
        &self.url
    }

    fn referrer(&self) -> Option<&str> {
        self.referrer.as_deref()
    }

    fn site_for_cookies(&self) -> Option<&str> {
        self.site_for_cookies.as_deref()
    }
}

/// Everything observable after both hooks ran.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub url_request_status: Status,
    pub transaction_status: Status,
    pub ctx: RequestContext,
    pub headers: HeaderSet,
}

impl Outcome {
    pub fn referrer(&self) -> Option<&str> {
        self.ctx.effective_referrer()
    }

    pub fn cookies(&self) -> Option<&str> {
        self.headers.get(header::COOKIE)
    }
}

impl TestRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_referrer(mut self, referrer: impl Into<String>) -> Self {
        self.referrer = Some(referrer.into());
        self
    }

    pub fn with_site_for_cookies(mut self, site: impl Into<String>) -> Self {
        self.site_for_cookies = Some(site.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    pub fn context(&self) -> RequestContext {
        RequestContext::from_request(self).expect("valid request context")
    }

    /// Runs the first hook only.
    pub fn before_url_request(&self, hacks: &SiteHacks) -> (Status, RequestContext) {
        let mut ctx = self.context();
        let status = hacks.on_before_url_request(None, &mut ctx);
        (status, ctx)
    }

    /// Runs the second hook only, on a fresh context.
    pub fn start_transaction(&self, hacks: &SiteHacks) -> (Status, HeaderSet) {
        let mut ctx = self.context();
        let mut headers = self.headers.clone();
        let status = hacks.on_before_start_transaction(self, &mut headers, None, &mut ctx);
        (status, headers)
    }

    /// Runs both hooks in pipeline order, carrying the first hook's referrer
    /// into the `Referer` header the way the host does before sending.
    pub fn run(&self, hacks: &SiteHacks) -> Outcome {
        let mut ctx = self.context();
        let url_request_status = hacks.on_before_url_request(None, &mut ctx);
        let mut headers = self.headers.clone();
        if let Some(referrer) = ctx.effective_referrer().map(str::to_owned) {
            headers.set(header::REFERER, referrer);
        }
        let transaction_status =
            hacks.on_before_start_transaction(self, &mut headers, None, &mut ctx);
        Outcome {
            url_request_status,
            transaction_status,
            ctx,
            headers,
        }
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }
}

pub fn request(url: impl Into<String>) -> TestRequest {
    TestRequest::new(url)
}

pub fn hacks() -> &'static SiteHacks {
    SiteHacks::shared()
}
