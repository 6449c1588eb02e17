//! Parsed HTML document and element query helpers
//!
//! The parsers only need a handful of capabilities from an HTML library:
//! select elements by tag or CSS selector, filter by attribute, read an
//! attribute and read an element's trimmed text. [`PageDocument`] exposes
//! exactly that over `scraper`.

use scraper::{ElementRef, Html, Selector};

/// An owned, parsed HTML page
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Parses a full HTML document
    ///
    /// Parsing never fails: malformed markup is repaired the way a browser
    /// would repair it.
    ///
    /// # Example
    ///
    /// ```
    /// use spotlight_harvest::PageDocument;
    ///
    /// let doc = PageDocument::parse("<html><body><h1> Hello </h1></body></html>");
    /// let h1 = doc.select_first("h1").unwrap();
    /// assert_eq!(spotlight_harvest::document::trimmed_text(&h1), "Hello");
    /// ```
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns every element matching a CSS selector, in document order
    ///
    /// An invalid selector matches nothing.
    pub fn select_all(&self, css: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(css) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(e) => {
                tracing::warn!("Invalid selector '{}': {:?}", css, e);
                Vec::new()
            }
        }
    }

    /// Returns the first element matching a CSS selector
    pub fn select_first(&self, css: &str) -> Option<ElementRef<'_>> {
        let selector = Selector::parse(css).ok()?;
        self.html.select(&selector).next()
    }

    /// Returns every element with the given tag name, in document order
    pub fn find_all_by_tag(&self, tag: &str) -> Vec<ElementRef<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().name().eq_ignore_ascii_case(tag))
            .collect()
    }

    /// Returns every element carrying attribute `name` whose value satisfies `predicate`
    pub fn find_all_by_attr<P>(&self, name: &str, predicate: P) -> Vec<ElementRef<'_>>
    where
        P: Fn(&str) -> bool,
    {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| element.value().attr(name).is_some_and(&predicate))
            .collect()
    }
}

/// Returns the first descendant of `element` matching a CSS selector
pub fn select_within<'a>(element: &ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    element.select(&selector).next()
}

/// Reads an attribute of an element
pub fn attr<'a>(element: &ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Concatenates all descendant text of an element and trims surrounding whitespace
pub fn trimmed_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Iterates over the whitespace-separated tokens of the `class` attribute
pub fn class_tokens<'a>(element: &ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .value()
        .attr("class")
        .unwrap_or("")
        .split_ascii_whitespace()
}
