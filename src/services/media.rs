use serde::Serialize;

pub const DEFAULT_SRCSET_WIDTHS: [u32; 4] = [300, 600, 900, 1200];

const CDN_HOST: &str = "cloudinary.com";
const UPLOAD_SEGMENT: &str = "/upload/";

/// An image reference with its CDN variants already resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResponsiveImage {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
    pub alt: String,
}

impl ResponsiveImage {
    pub fn new(url: &str, width: u32, widths: &[u32], alt: &str) -> Self {
        Self {
            src: optimized_image(url, Some(width), None, None),
            srcset: responsive_srcset(url, widths, None, None),
            alt: alt.to_string(),
        }
    }
}

/// Rewrites a Cloudinary delivery URL to request a resized, recompressed
/// variant. Anything else comes back unchanged.
pub fn optimized_image(
    url: &str,
    width: Option<u32>,
    quality: Option<&str>,
    format: Option<&str>,
) -> String {
    if !url.contains(CDN_HOST) {
        return url.to_string();
    }
    let Some((base, file)) = url.split_once(UPLOAD_SEGMENT) else {
        return url.to_string();
    };
    if file.is_empty() {
        return url.to_string();
    }

    let mut transformations = vec![
        format!("f_{}", format.unwrap_or("auto")),
        format!("q_{}", quality.unwrap_or("auto")),
    ];
    if let Some(w) = width.filter(|w| *w > 0) {
        transformations.push(format!("w_{w}"));
    }

    format!("{base}{UPLOAD_SEGMENT}{}/{file}", transformations.join(","))
}

/// `(url, width)` candidates for responsive selection, encoded the same way
/// as `optimized_image` with the given quality and format.
pub fn srcset_candidates(
    url: &str,
    widths: &[u32],
    quality: Option<&str>,
    format: Option<&str>,
) -> Vec<(String, u32)> {
    if !url.contains(CDN_HOST) {
        return vec![];
    }
    widths
        .iter()
        .map(|&w| (optimized_image(url, Some(w), quality, format), w))
        .collect()
}

/// Renders the candidates as an HTML `srcset` attribute value.
pub fn responsive_srcset(
    url: &str,
    widths: &[u32],
    quality: Option<&str>,
    format: Option<&str>,
) -> Option<String> {
    let candidates = srcset_candidates(url, widths, quality, format);
    if candidates.is_empty() {
        return None;
    }
    Some(
        candidates
            .iter()
            .map(|(u, w)| format!("{u} {w}w"))
            .collect::<Vec<_>>()
            .join(", "),
    )
}
