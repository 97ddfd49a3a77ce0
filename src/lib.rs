pub mod constants;
mod context;
mod cookies;
mod headers;
mod matcher;
mod redirect_guard;
mod referrer;
mod result;
mod rules;
pub mod site;
mod site_hacks;
mod util;

pub use context::{RequestContext, UrlRequest};
pub use cookies::inject_cookies;
pub use headers::HeaderSet;
pub use matcher::{PatternError, UrlMatcher};
pub use redirect_guard::is_blocked_redirect;
pub use referrer::referrer_override;
pub use result::{ContextError, Status};
pub use rules::{DomainRule, RuleAction, RuleTable, ValidationError};
pub use site_hacks::{ResponseCallback, SiteHacks};
pub use util::normalize_lower;
