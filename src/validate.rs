//! Operator input validation
//!
//! Pure functions over strings. Each returns the accepted (possibly
//! normalized) value or a [`ValidationError`] carrying the message shown to
//! the operator.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;

/// Characters a network name may not contain
static NET_NAME_FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[~`!$%^&*()+={}\[\]|\\/:"',<>?]"#).expect("static pattern")
});

/// Characters a tag list may not contain (network name set plus `@#`)
static TAGS_FORBIDDEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[~`!@#$%^&*()+={}\[\]|\\/:"',<>?]"#).expect("static pattern")
});

/// Network type strings are letters separated by whitespace
static NET_TYPE_FORBIDDEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z\s]").expect("static pattern"));

/// Dashboard product type, keyed by two-letter device code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductType {
    Appliance,
    Switch,
    Wireless,
    Camera,
    CellularGateway,
    SystemsManager,
}

impl ProductType {
    /// Every product type, in device code display order
    pub const ALL: [ProductType; 6] = [
        ProductType::Appliance,
        ProductType::Switch,
        ProductType::Wireless,
        ProductType::Camera,
        ProductType::CellularGateway,
        ProductType::SystemsManager,
    ];

    /// Lowercase device code
    pub fn code(self) -> &'static str {
        match self {
            ProductType::Appliance => "mx",
            ProductType::Switch => "ms",
            ProductType::Wireless => "mr",
            ProductType::Camera => "mv",
            ProductType::CellularGateway => "mg",
            ProductType::SystemsManager => "sm",
        }
    }

    /// Canonical Dashboard type string
    pub fn as_str(self) -> &'static str {
        match self {
            ProductType::Appliance => "appliance",
            ProductType::Switch => "switch",
            ProductType::Wireless => "wireless",
            ProductType::Camera => "camera",
            ProductType::CellularGateway => "cellularGateway",
            ProductType::SystemsManager => "systemsManager",
        }
    }

    /// Look up by device code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.code().eq_ignore_ascii_case(code))
    }

    /// Look up by canonical type string, ignoring case
    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ProductType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Valid device codes as shown in messages, e.g. `[MX, MS, MR, MV, MG, SM]`
pub fn device_codes_display() -> String {
    let codes: Vec<String> = ProductType::ALL
        .iter()
        .map(|p| p.code().to_uppercase())
        .collect();
    format!("[{}]", codes.join(", "))
}

fn net_types_display() -> String {
    let types: Vec<&str> = ProductType::ALL.iter().map(|p| p.as_str()).collect();
    format!("[{}]", types.join(", "))
}

/// Validate an API key entered at the prompt, returning it trimmed.
pub fn validate_api_key(key: &str) -> Result<String, ValidationError> {
    if key.is_empty() {
        return Err(ValidationError::BlankApiKey);
    }
    if key.trim().is_empty() {
        return Err(ValidationError::WhitespaceApiKey);
    }
    Ok(key.trim().to_string())
}

/// Validate a network name.
///
/// Network names can only contain letters, numbers, spaces, and `.@#_-`.
pub fn validate_net_name(net_name: &str) -> Result<&str, ValidationError> {
    if net_name.is_empty() {
        return Err(ValidationError::BlankNetworkName);
    }
    if NET_NAME_FORBIDDEN.is_match(net_name) {
        return Err(ValidationError::InvalidNetworkName(net_name.to_string()));
    }
    Ok(net_name)
}

/// Validate a space-separated tag list. The empty string means no tags.
pub fn validate_tags(tags: &str) -> Result<&str, ValidationError> {
    if TAGS_FORBIDDEN.is_match(tags) {
        return Err(ValidationError::InvalidTags(tags.to_string()));
    }
    Ok(tags)
}

/// Validate a device code, returning it in lower case.
#[allow(dead_code)]
pub fn validate_device_code(device_code: &str) -> Result<String, ValidationError> {
    product_type_for_code(device_code).map(|p| p.code().to_string())
}

/// Map a device code to its product type.
pub fn product_type_for_code(device_code: &str) -> Result<ProductType, ValidationError> {
    if device_code.trim().is_empty() {
        return Err(ValidationError::BlankDeviceCode {
            valid: device_codes_display(),
        });
    }
    ProductType::from_code(device_code).ok_or_else(|| ValidationError::InvalidDeviceCode {
        code: device_code.trim().to_uppercase(),
        valid: device_codes_display(),
    })
}

/// Validate a space-separated list of device codes.
///
/// One code selects a standalone network, several a combined network.
/// Duplicates are dropped; order of first appearance is kept. A single
/// invalid code rejects the whole list.
pub fn validate_device_codes(device_codes: &str) -> Result<Vec<ProductType>, ValidationError> {
    let mut types = Vec::new();
    for code in device_codes.split_whitespace() {
        let product = product_type_for_code(code)?;
        if !types.contains(&product) {
            types.push(product);
        }
    }

    if types.is_empty() {
        return Err(ValidationError::BlankDeviceCode {
            valid: device_codes_display(),
        });
    }
    Ok(types)
}

/// Join product types into the Dashboard's space-separated type string.
pub fn join_product_types(types: &[ProductType]) -> String {
    types
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate a space-separated list of canonical network type strings,
/// returning the normalized (canonical case, de-duplicated) string.
pub fn validate_net_type(net_type: &str) -> Result<String, ValidationError> {
    if net_type.trim().is_empty() {
        return Err(ValidationError::BlankNetworkType {
            valid: net_types_display(),
        });
    }
    if NET_TYPE_FORBIDDEN.is_match(net_type) {
        return Err(ValidationError::InvalidNetworkType {
            kind: net_type.trim().to_string(),
            valid: net_types_display(),
        });
    }

    let mut types = Vec::new();
    for name in net_type.split_whitespace() {
        let product =
            ProductType::from_type_name(name).ok_or_else(|| ValidationError::InvalidNetworkType {
                kind: name.to_string(),
                valid: net_types_display(),
            })?;
        if !types.contains(&product) {
            types.push(product);
        }
    }
    Ok(join_product_types(&types))
}
