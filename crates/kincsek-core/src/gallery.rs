/// Append `url` to the gallery. Returns None when the url is blank.
/// Urls are neither validated nor deduplicated.
pub fn append_image(images: &[String], url: &str) -> Option<Vec<String>> {
    if url.trim().is_empty() {
        return None;
    }
    let mut updated = images.to_vec();
    updated.push(url.to_string());
    Some(updated)
}

/// Remove the image at `index`; out of range indices are ignored
pub fn remove_image(images: &[String], index: usize) -> Vec<String> {
    images
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, img)| img.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<String> {
        vec![
            "https://example.com/1.jpg".to_string(),
            "https://example.com/2.jpg".to_string(),
        ]
    }

    #[test]
    fn test_append_then_remove_restores_list() {
        let images = sample();
        let appended = append_image(&images, "https://example.com/3.jpg").unwrap();
        assert_eq!(appended.len(), 3);
        let restored = remove_image(&appended, 2);
        assert_eq!(restored, images);
    }

    #[test]
    fn test_blank_url_is_ignored() {
        assert_eq!(append_image(&sample(), ""), None);
        assert_eq!(append_image(&sample(), "  "), None);
    }

    #[test]
    fn test_duplicates_allowed() {
        let images = sample();
        let appended = append_image(&images, &images[0]).unwrap();
        assert_eq!(appended[0], appended[2]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let images = sample();
        assert_eq!(remove_image(&images, 10), images);
        assert_eq!(remove_image(&images, 0), vec![images[1].clone()]);
    }
}
