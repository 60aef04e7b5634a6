use serde::{Deserialize, Serialize};

/// Path of the relay endpoint that streams remote files from the same origin.
pub const PROXY_DOWNLOAD_PATH: &str = "/api/proxy-download";

/// A generated file selected for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Remote URL as returned by the download endpoint.
    pub url: String,
    pub name: String,
    /// Lower-case extension without the dot, e.g. `glb`.
    pub format: String,
}

impl Asset {
    /// Same-origin URL the viewer loads the asset from.
    pub fn viewer_url(&self) -> String {
        proxied_url(&self.url)
    }
}

pub fn proxied_url(remote: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(remote.as_bytes()).collect();
    format!("{}?url={}", PROXY_DOWNLOAD_PATH, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_url_goes_through_the_relay() {
        let asset = Asset {
            url: "https://files.example.com/a/model.glb?sig=x&y=1".to_string(),
            name: "model.glb".to_string(),
            format: "glb".to_string(),
        };
        assert_eq!(
            asset.viewer_url(),
            "/api/proxy-download?url=https%3A%2F%2Ffiles.example.com%2Fa%2Fmodel.glb%3Fsig%3Dx%26y%3D1"
        );
    }
}
