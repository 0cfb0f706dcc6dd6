// SPDX-License-Identifier: MPL-2.0
//! RSS 2.0 and Atom feed parsing.
//!
//! Only the handful of fields a front page needs are extracted: title, link,
//! summary, publication date, and an illustration. Everything else in the
//! document is skipped.

use super::{NewsId, NewsItem};
use crate::error::FetchError;
use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parses up to `max_items` entries from an RSS or Atom document.
///
/// Returns [`FetchError::Parse`] when the XML is malformed or when the
/// document is not a feed at all (e.g. an HTML error page).
pub fn parse_feed(xml: &str, source: &str, max_items: usize) -> Result<Vec<NewsItem>, FetchError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut saw_feed_root = false;
    let mut entry: Option<EntryBuilder> = None;
    let mut field: Option<String> = None;
    let mut text = String::new();

    loop {
        if saw_feed_root && items.len() >= max_items {
            break;
        }

        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = qualified_name(e);
                if is_feed_root(&name) {
                    saw_feed_root = true;
                }

                if is_entry(&name) {
                    entry = Some(EntryBuilder::default());
                    continue;
                }

                if let Some(builder) = entry.as_mut() {
                    builder.absorb_attributes(&name, e);
                    if field.is_none() && is_text_field(&name) {
                        field = Some(name);
                        text.clear();
                    }
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = qualified_name(e);
                if let Some(builder) = entry.as_mut() {
                    builder.absorb_attributes(&name, e);
                }
            }
            Ok(Event::Text(ref e)) => {
                if field.is_some() {
                    let piece = match e.unescape() {
                        Ok(value) => value.into_owned(),
                        // HTML entities such as &nbsp; are not valid XML;
                        // keep the raw text and let clean_text decode it.
                        Err(_) => String::from_utf8_lossy(&**e).into_owned(),
                    };
                    push_piece(&mut text, &piece);
                }
            }
            Ok(Event::CData(ref e)) => {
                if field.is_some() {
                    push_piece(&mut text, &String::from_utf8_lossy(&**e));
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();

                if field.as_deref() == Some(name.as_str()) {
                    if let Some(builder) = entry.as_mut() {
                        builder.set_field(&name, std::mem::take(&mut text));
                    }
                    field = None;
                } else if is_entry(&name) {
                    if let Some(builder) = entry.take() {
                        match builder.build(source) {
                            Ok(item) => items.push(item),
                            Err(err) => tracing::debug!(%err, source, "skipping feed entry"),
                        }
                    }
                    field = None;
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(FetchError::Parse(format!(
                    "{} at byte {}",
                    err,
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    if !saw_feed_root {
        return Err(FetchError::Parse(format!("{source}: document is not a feed")));
    }

    Ok(items)
}

/// Strips HTML tags, decodes common entities, and collapses whitespace.
#[must_use]
pub fn clean_text(raw: &str) -> String {
    let mut stripped = String::with_capacity(raw.len());
    let mut in_tag = false;
    for ch in raw.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                stripped.push(' ');
            }
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    decode_entities(&stripped)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';').filter(|&end| end <= 10) {
            Some(end) => {
                let entity = &tail[1..end];
                match decode_entity(entity) {
                    Some(ch) => out.push(ch),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(entity: &str) -> Option<char> {
    match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        "hellip" => Some('…'),
        "mdash" => Some('—'),
        "ndash" => Some('–'),
        "rsquo" | "lsquo" => Some('\''),
        "rdquo" | "ldquo" => Some('"'),
        _ => {
            let numeric = entity.strip_prefix('#')?;
            let code = match numeric.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => numeric.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

/// Parses RFC 2822 (RSS) and RFC 3339 (Atom, Dublin Core) timestamps.
#[must_use]
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|date| date.with_timezone(&Utc))
        .ok()
}

fn push_piece(text: &mut String, piece: &str) {
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(piece);
}

fn qualified_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn is_feed_root(name: &str) -> bool {
    matches!(name, "rss" | "feed" | "rdf:RDF" | "channel")
}

fn is_entry(name: &str) -> bool {
    matches!(name, "item" | "entry")
}

fn is_text_field(name: &str) -> bool {
    matches!(
        name,
        "title"
            | "link"
            | "guid"
            | "id"
            | "description"
            | "summary"
            | "content"
            | "content:encoded"
            | "pubDate"
            | "published"
            | "updated"
            | "dc:date"
            | "category"
    )
}

fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .and_then(|attr| attr.unescape_value().ok().map(|v| v.into_owned()))
}

fn looks_like_image(mime: Option<&str>, url: &str) -> bool {
    if let Some(mime) = mime {
        return mime.starts_with("image/");
    }
    let lower = url.to_lowercase();
    [".jpg", ".jpeg", ".png", ".gif", ".webp"]
        .iter()
        .any(|ext| lower.split('?').next().unwrap_or("").ends_with(ext))
}

#[derive(Debug, Default)]
struct EntryBuilder {
    id: Option<String>,
    title: Option<String>,
    link: Option<String>,
    description: Option<String>,
    summary: Option<String>,
    content: Option<String>,
    published: Option<DateTime<Utc>>,
    updated: Option<DateTime<Utc>>,
    image_url: Option<String>,
    category: Option<String>,
}

impl EntryBuilder {
    fn absorb_attributes(&mut self, name: &str, e: &BytesStart<'_>) {
        match name {
            // Atom: <link rel="alternate" href="..."/>
            "link" => {
                let Some(href) = attribute(e, b"href") else {
                    return;
                };
                let rel = attribute(e, b"rel");
                match rel.as_deref() {
                    None | Some("alternate") => {
                        self.link.get_or_insert(href);
                    }
                    Some("enclosure") => {
                        let mime = attribute(e, b"type");
                        if looks_like_image(mime.as_deref(), &href) {
                            self.image_url.get_or_insert(href);
                        }
                    }
                    _ => {}
                }
            }
            "enclosure" | "media:content" => {
                let Some(url) = attribute(e, b"url") else {
                    return;
                };
                let mime = attribute(e, b"type");
                let medium_is_image = attribute(e, b"medium").as_deref() == Some("image");
                if medium_is_image || looks_like_image(mime.as_deref(), &url) {
                    self.image_url.get_or_insert(url);
                }
            }
            "media:thumbnail" => {
                if let Some(url) = attribute(e, b"url") {
                    self.image_url.get_or_insert(url);
                }
            }
            // Atom: <category term="..."/>
            "category" => {
                if let Some(term) = attribute(e, b"term") {
                    self.category.get_or_insert(term);
                }
            }
            _ => {}
        }
    }

    fn set_field(&mut self, name: &str, value: String) {
        let value = value.trim().to_string();
        if value.is_empty() {
            return;
        }
        match name {
            "title" => {
                self.title.get_or_insert(value);
            }
            "link" => {
                self.link.get_or_insert(value);
            }
            "guid" | "id" => {
                self.id.get_or_insert(value);
            }
            "description" => {
                self.description.get_or_insert(value);
            }
            "summary" => {
                self.summary.get_or_insert(value);
            }
            "content" | "content:encoded" => {
                self.content.get_or_insert(value);
            }
            "pubDate" | "published" | "dc:date" => {
                if self.published.is_none() {
                    self.published = parse_date(&value);
                }
            }
            "updated" => {
                if self.updated.is_none() {
                    self.updated = parse_date(&value);
                }
            }
            "category" => {
                self.category.get_or_insert(value);
            }
            _ => {}
        }
    }

    fn build(self, source: &str) -> Result<NewsItem, FetchError> {
        let title = clean_text(self.title.as_deref().unwrap_or_default());
        let link = self.link.unwrap_or_default().trim().to_string();
        let summary = self
            .description
            .or(self.summary)
            .or(self.content)
            .map(|raw| clean_text(&raw))
            .unwrap_or_default();

        let raw_id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .or_else(|| (!link.is_empty()).then(|| link.clone()))
            .unwrap_or_else(|| format!("{source}:{title}"));
        let id = NewsId::new(raw_id)?;

        let mut item = NewsItem::new(id, title, summary, link, source);
        item.image_url = self.image_url;
        item.published = self.published.or(self.updated);
        if let Some(category) = self.category {
            item.category = clean_text(&category);
        }
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>Channel title must be ignored</title>
    <item>
      <title>Robot learns &amp; laughs</title>
      <link>https://news.example.com/robot</link>
      <guid isPermaLink="false">robot-1</guid>
      <description><![CDATA[<p>The robot <b>laughed</b>&nbsp;twice.</p>]]></description>
      <pubDate>Tue, 10 Jun 2025 09:00:00 +0000</pubDate>
      <enclosure url="https://img.example.com/robot.jpg" type="image/jpeg" length="100"/>
    </item>
    <item>
      <title>Second story</title>
      <link>https://news.example.com/second</link>
      <media:thumbnail url="https://img.example.com/second.png"/>
      <content:encoded><![CDATA[<div>Full body</div>]]></content:encoded>
    </item>
    <item>
      <title>Third story</title>
      <link>https://news.example.com/third</link>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom feed</title>
  <entry>
    <title type="html">Atom &lt;em&gt;entry&lt;/em&gt;</title>
    <link rel="alternate" href="https://atom.example.com/1"/>
    <link rel="enclosure" type="image/png" href="https://atom.example.com/1.png"/>
    <id>tag:atom.example.com,2025:1</id>
    <published>2025-06-11T10:30:00Z</published>
    <summary>Short &amp; sweet</summary>
    <category term="Robotics"/>
  </entry>
</feed>"#;

    #[test]
    fn parses_rss_items_in_document_order() {
        let items = parse_feed(RSS, "example", 10).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Robot learns & laughs");
        assert_eq!(items[1].title, "Second story");
        assert_eq!(items[2].title, "Third story");
    }

    #[test]
    fn rss_fields_are_extracted() {
        let items = parse_feed(RSS, "example", 10).unwrap();
        let first = &items[0];
        assert_eq!(first.id.as_str(), "robot-1");
        assert_eq!(first.url, "https://news.example.com/robot");
        assert_eq!(first.summary, "The robot laughed twice.");
        assert_eq!(
            first.image_url.as_deref(),
            Some("https://img.example.com/robot.jpg")
        );
        assert_eq!(first.source, "example");
        assert!(first.published.is_some());
    }

    #[test]
    fn id_falls_back_to_link() {
        let items = parse_feed(RSS, "example", 10).unwrap();
        assert_eq!(items[1].id.as_str(), "https://news.example.com/second");
        assert_eq!(items[1].summary, "Full body");
        assert_eq!(
            items[1].image_url.as_deref(),
            Some("https://img.example.com/second.png")
        );
    }

    #[test]
    fn respects_max_items() {
        let items = parse_feed(RSS, "example", 2).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn zero_quota_still_recognizes_the_feed() {
        assert!(parse_feed(RSS, "example", 0).unwrap().is_empty());
        assert!(parse_feed(ATOM, "atom", 0).unwrap().is_empty());
        assert!(matches!(
            parse_feed("<html><body>oops</body></html>", "example", 0),
            Err(FetchError::Parse(_))
        ));
    }

    #[test]
    fn parses_atom_entries() {
        let items = parse_feed(ATOM, "atom", 10).unwrap();
        assert_eq!(items.len(), 1);
        let entry = &items[0];
        assert_eq!(entry.title, "Atom entry");
        assert_eq!(entry.url, "https://atom.example.com/1");
        assert_eq!(entry.id.as_str(), "tag:atom.example.com,2025:1");
        assert_eq!(entry.summary, "Short & sweet");
        assert_eq!(entry.category, "Robotics");
        assert_eq!(
            entry.image_url.as_deref(),
            Some("https://atom.example.com/1.png")
        );
        assert_eq!(
            entry.published,
            Some(DateTime::parse_from_rfc3339("2025-06-11T10:30:00Z").unwrap().with_timezone(&Utc))
        );
    }

    #[test]
    fn html_page_is_not_a_feed() {
        let err = parse_feed("<html><body>Oops</body></html>", "bad", 10).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = parse_feed("<rss><channel><item></channel></rss>", "bad", 10).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn clean_text_strips_tags_and_whitespace() {
        assert_eq!(
            clean_text("  <p>Hello\n\n <a href=\"x\">world</a></p> "),
            "Hello world"
        );
    }

    #[test]
    fn clean_text_decodes_entities() {
        assert_eq!(clean_text("Fish &amp; chips &#8211; &#x41;"), "Fish & chips – A");
        assert_eq!(clean_text("AT&T rocks"), "AT&T rocks");
        assert_eq!(clean_text("&unknown; stays"), "&unknown; stays");
    }

    #[test]
    fn parse_date_accepts_both_formats() {
        assert!(parse_date("Tue, 10 Jun 2025 09:00:00 GMT").is_some());
        assert!(parse_date("2025-06-11T10:30:00+02:00").is_some());
        assert!(parse_date("yesterday").is_none());
    }
}
