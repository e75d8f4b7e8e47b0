use std::borrow::Cow;
use std::fs;
use std::path::Path;

use crate::Config;
use crate::error::Error;
use crate::record::ProjectRecord;
use crate::util;

const HEAD_OPEN: &str = r#"
    <!DOCTYPE html>
    <html lang="en">
    <head>
        <meta charset="UTF-8">
        <meta name="viewport" content="width=device-width, initial-scale=1.0">
        <title>"#;

const STYLE: &str = r#"</title>
        <style>
            body {
                font-family: Arial, sans-serif;
                background-color: #f4f4f9;
                margin: 0;
                padding: 0;
            }
            h1 {
                text-align: center;
                margin: 20px 0;
                color: #333;
            }
            .container {
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                padding: 0 20px;
            }
            .project {
                border: 1px solid #ddd;
                border-radius: 8px;
                margin: 10px;
                padding: 20px;
                width: 300px;
                background-color: white;
                text-align: center;
                box-shadow: 2px 2px 12px rgba(0, 0, 0, 0.1);
                transition: transform 0.3s, box-shadow 0.3s;
            }
            .project img {
                max-width: 100%;
                height: auto;
                border-radius: 4px;
            }
            .project h3 {
                font-size: 18px;
                color: #007BFF;
                margin: 10px 0;
            }
            .project a {
                text-decoration: none;
                color: #007BFF;
                font-weight: bold;
            }
            .project a:hover {
                color: #0056b3;
            }
            .project:hover {
                transform: translateY(-10px);
                box-shadow: 4px 4px 20px rgba(0, 0, 0, 0.2);
            }

            /* Media Queries for responsiveness */
            @media (max-width: 768px) {
                .project {
                    width: 45%;
                }
            }
            @media (max-width: 480px) {
                .project {
                    width: 100%;
                }
            }
        </style>
    </head>
    <body>
        <h1>"#;

const CONTAINER_OPEN: &str = r#"</h1>
        <div class="container">
    "#;

const FOOTER: &str = r#"
        </div>
    </body>
    </html>
    "#;

/// Writes the static gallery page.
///
/// Titles and links go into the page verbatim unless `escape_markup` is set,
/// a scraped title containing markup ends up as markup.
pub struct Renderer {
    gallery_title: String,
    escape_markup: bool,
}

impl Renderer {
    pub fn new(config: &Config) -> Self {
        Self {
            gallery_title: config.gallery_title.clone(),
            escape_markup: config.escape_markup,
        }
    }

    /// One card per record, in the order given.
    pub fn render_document<'a, I>(&self, records: I) -> String
    where
        I: IntoIterator<Item = &'a ProjectRecord>,
    {
        let title = self.text(&self.gallery_title);
        let mut html = String::new();
        html.push_str(HEAD_OPEN);
        html.push_str(&title);
        html.push_str(STYLE);
        html.push_str(&title);
        html.push_str(CONTAINER_OPEN);
        for record in records {
            html.push_str(&format!(
                r#"
            <div class="project">
                <img src="{}" alt="Project Image">
                <h3>{}</h3>
                <a href="{}" target="_blank">View Project</a>
                <p>Ajouté le {}</p>
            </div>
        "#,
                self.text(&record.image),
                self.text(&record.title),
                self.text(&record.link),
                record.retrieved_at_display(),
            ));
        }
        html.push_str(FOOTER);
        html
    }

    /// Overwrites `path` with the rendered page.
    pub fn render<'a, I>(&self, records: I, path: &Path) -> Result<(), Error>
    where
        I: IntoIterator<Item = &'a ProjectRecord>,
    {
        let html = self.render_document(records);
        fs::write(path, html).map_err(|source| Error::Render {
            path: path.to_owned(),
            source,
        })
    }

    fn text<'s>(&self, s: &'s str) -> Cow<'s, str> {
        if self.escape_markup {
            Cow::Owned(util::escape_html(s))
        } else {
            Cow::Borrowed(s)
        }
    }
}
