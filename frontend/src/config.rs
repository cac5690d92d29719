use log::Level;

/// Scroll offset (px) past which the sticky header switches to its compact form.
pub const HEADER_COMPACT_OFFSET: f64 = 60.0;

/// Scroll offset (px) past which the back-to-top button is shown.
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Endpoint of the email relay. `EMAILJS_API_URL` at build time points it
/// somewhere else (a local mock, for instance).
pub fn get_relay_url() -> &'static str {
    option_env!("EMAILJS_API_URL").unwrap_or(DEFAULT_RELAY_URL)
}

/// Credentials for the email relay, baked in at build time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayCredentials {
    pub fn from_env() -> Option<Self> {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Option<Self> {
        let non_empty = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
        Some(Self {
            service_id: non_empty(service_id)?,
            template_id: non_empty(template_id)?,
            public_key: non_empty(public_key)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_need_every_part() {
        assert!(RelayCredentials::from_parts(Some("svc"), Some("tpl"), None).is_none());
        assert!(RelayCredentials::from_parts(Some("svc"), Some("  "), Some("key")).is_none());

        let creds = RelayCredentials::from_parts(Some("svc"), Some("tpl"), Some("key")).unwrap();
        assert_eq!(creds.service_id, "svc");
        assert_eq!(creds.template_id, "tpl");
        assert_eq!(creds.public_key, "key");
    }
}
