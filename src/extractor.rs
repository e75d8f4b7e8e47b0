use chrono::NaiveDateTime;
use scraper::{ElementRef, Html, Selector};

use crate::Config;
use crate::error::Error;
use crate::record::ProjectRecord;
use crate::util;

/// Pulls project cards out of the listing page.
///
/// The matching rule is intentionally narrow: the `<section>` with the
/// configured id, the `<a>` elements inside it whose class list, joined
/// with single spaces, is exactly the configured class string, and for each
/// of them the closest `<img>` that comes before it in document order. If
/// the upstream markup changes, this finds nothing instead of guessing.
pub struct Extractor {
    section_selector: Selector,
    anchor_selector: Selector,
    anchor_class: String,
    section_id: String,
    origin: String,
    placeholder_image: String,
}

impl Extractor {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let section_selector =
            parse_selector(&format!("section[id=\"{}\"]", config.section_id))?;
        let anchor_selector = parse_selector("a[class]")?;
        Ok(Self {
            section_selector,
            anchor_selector,
            anchor_class: normalize_classes(&config.anchor_class),
            section_id: config.section_id.clone(),
            origin: config.origin.clone(),
            placeholder_image: config.placeholder_image.clone(),
        })
    }

    /// Parse `document` and extract its projects, in page order.
    ///
    /// A missing section only logs a warning and yields no project.
    pub fn extract(&self, document: &str, now: NaiveDateTime) -> Vec<ProjectRecord> {
        let html = Html::parse_document(document);
        match self.extract_from(&html, now) {
            Some(records) => records,
            None => {
                log::warn!("Cannot find section '{}'", self.section_id);
                vec![]
            }
        }
    }

    /// Returns `None` when the section is absent.
    pub fn extract_from(&self, html: &Html, now: NaiveDateTime) -> Option<Vec<ProjectRecord>> {
        let section = html.select(&self.section_selector).next()?;
        let anchors: Vec<ElementRef> = section
            .select(&self.anchor_selector)
            .filter(|a| {
                a.value()
                    .attr("class")
                    .map_or(false, |c| normalize_classes(c) == self.anchor_class)
            })
            .collect();
        let images = preceding_images(html, &anchors);

        let mut records = vec![];
        for (anchor, image) in anchors.iter().zip(images) {
            let href = match anchor.value().attr("href") {
                Some(href) => href,
                None => {
                    log::warn!("Skipping project anchor without href");
                    continue;
                }
            };
            records.push(ProjectRecord {
                title: anchor.text().collect::<String>().trim().to_owned(),
                link: util::join_url(&self.origin, href),
                image: image.unwrap_or_else(|| self.placeholder_image.clone()),
                retrieved_at: now,
            });
        }
        Some(records)
    }
}

/// Class list in attribute order, separated by single spaces.
fn normalize_classes(class: &str) -> String {
    class.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn parse_selector(selector: &str) -> Result<Selector, Error> {
    Selector::parse(selector).map_err(|e| Error::InvalidSelector {
        selector: selector.to_owned(),
        reason: format!("{:?}", e),
    })
}

/// For every anchor, the `src` of the last `<img>` met before it while
/// walking the whole document in pre-order. `None` when there is no such
/// image or when it has no `src`.
fn preceding_images(html: &Html, anchors: &[ElementRef]) -> Vec<Option<String>> {
    let mut images = vec![None; anchors.len()];
    let mut last_img: Option<Option<String>> = None;
    for node in html.tree.root().descendants() {
        if let Some(idx) = anchors.iter().position(|a| a.id() == node.id()) {
            images[idx] = last_img.clone().flatten();
        }
        if let Some(element) = node.value().as_element() {
            if element.name() == "img" {
                last_img = Some(element.attr("src").map(|s| s.to_owned()));
            }
        }
    }
    images
}
