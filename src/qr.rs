//! QR rendering boundary.
//!
//! Payment addresses are rendered as QR codes by an external image service.
//! This crate only constructs the GET URL; the image is never fetched or
//! parsed here.

const QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// URL of a rendered QR code image for the given wallet address.
pub fn qr_image_url(address: &str) -> String {
    format!(
        "{QR_ENDPOINT}?size=200x200&data={}&bgcolor=ffffff&color=030712&margin=10",
        urlencoding::encode(address)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_is_url_encoded() {
        let url = qr_image_url("addr with spaces/slash");
        assert!(url.starts_with("https://api.qrserver.com/v1/create-qr-code/?size=200x200"));
        assert!(url.contains("data=addr%20with%20spaces%2Fslash"));
    }

    #[test]
    fn plain_address_passes_through() {
        let url = qr_image_url("ADminSoLanaWaLLetAddr3ssHeresm7v5G");
        assert!(url.contains("data=ADminSoLanaWaLLetAddr3ssHeresm7v5G"));
    }
}
