use site_hacks_rs::HeaderSet;

pub fn header_pairs(headers: &HeaderSet) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

pub fn cookie_pairs(value: &str) -> Vec<&str> {
    value.split("; ").filter(|pair| !pair.is_empty()).collect()
}
