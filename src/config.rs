use std::path::PathBuf;

use reqwest::Url;

use crate::error::Error;

pub struct Config {
    /// Page listing the latest projects
    pub url: String,
    /// Origin prepended to relative project links
    pub origin: String,
    /// `id` of the section holding the project list
    pub section_id: String,
    /// Exact `class` attribute of a project anchor. Matching is on the whole
    /// attribute string, so any change upstream yields zero projects.
    pub anchor_class: String,
    /// Thumbnail used when no image precedes a project anchor
    pub placeholder_image: String,
    /// JSON file holding every project seen so far
    pub store_path: PathBuf,
    /// Generated HTML gallery
    pub output_path: PathBuf,
    /// Delay between two scans in seconds.
    pub poll_interval_secs: u64,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Bot name / user agent
    pub bot_name: String,
    /// Heading and `<title>` of the gallery page.
    pub gallery_title: String,
    /// If set to true, titles and links are HTML-escaped before being
    /// written into the gallery. Default to false, the scraped source is
    /// trusted.
    pub escape_markup: bool,
}

impl Config {
    pub fn sanity_check(&self) -> Result<(), Error> {
        if self.request_timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "request_timeout_secs cannot be zero".to_owned(),
            ));
        }
        for (name, value) in [("url", &self.url), ("origin", &self.origin)] {
            if let Err(e) = Url::parse(value) {
                return Err(Error::InvalidConfig(format!(
                    "{} `{}` is not a valid url: {}",
                    name, value, e
                )));
            }
        }
        if self.section_id.trim().is_empty() {
            return Err(Error::InvalidConfig("section_id cannot be empty".to_owned()));
        }
        if self.anchor_class.trim().is_empty() {
            return Err(Error::InvalidConfig("anchor_class cannot be empty".to_owned()));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "https://wokwi.com/esp32".to_owned(),
            origin: "https://wokwi.com".to_owned(),
            section_id: "latest-projects".to_owned(),
            anchor_class: "MuiTypography-root MuiTypography-inherit MuiLink-root MuiLink-underlineAlways css-1w2fn6y".to_owned(),
            placeholder_image: "https://via.placeholder.com/150".to_owned(),
            store_path: PathBuf::from("projets_enregistres.json"),
            output_path: PathBuf::from("projects.html"),
            poll_interval_secs: 60,
            request_timeout_secs: 10,
            bot_name: "wokwatchbot".to_owned(),
            gallery_title: "Latest ESP32 Projects".to_owned(),
            escape_markup: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        assert!(Config::default().sanity_check().is_ok());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let config = Config {
            request_timeout_secs: 0,
            ..Config::default()
        };
        assert!(matches!(config.sanity_check(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn relative_origin_is_rejected() {
        let config = Config {
            origin: "wokwi.com".to_owned(),
            ..Config::default()
        };
        assert!(matches!(config.sanity_check(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn blank_section_id_is_rejected() {
        let config = Config {
            section_id: "  ".to_owned(),
            ..Config::default()
        };
        assert!(config.sanity_check().is_err());
    }
}
