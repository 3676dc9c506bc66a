/// Text the extraction collaborator produced for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

impl PageText {
    pub fn new(page_number: u32, text: impl Into<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
        }
    }
}

/// The concatenated text of a whole document.
///
/// Pages are joined in the order they are supplied, with no separator. A page
/// without text contributes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedText {
    text: String,
    page_count: usize,
}

impl ExtractedText {
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = PageText>,
    {
        let mut text = String::new();
        let mut page_count = 0;

        for page in pages {
            text.push_str(&page.text);
            page_count += 1;
        }

        Self { text, page_count }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }
}
