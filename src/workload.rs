use {
    crate::{InputError, InputResult, Page},
    std::{fmt, str::FromStr},
};

/// Simulation input: frame count and page request sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Number of physical frames.
    pub frame_count: usize,

    /// Page requests, in order.
    pub requests: Vec<Page>,

    /// Size of the page universe, i.e. the largest requested page.
    pub page_count: Page,
}

impl Workload {
    /// Creates a workload, deriving the page universe from the requests.
    pub fn new(frame_count: usize, requests: Vec<Page>) -> Self {
        let page_count = requests.iter().copied().max().unwrap_or(0);
        Self {
            frame_count,
            requests,
            page_count,
        }
    }

    /// Parses the two-line text format.
    ///
    /// The first line holds the frame count, the second one the page requests
    /// separated by whitespace.
    pub fn parse(text: &str) -> InputResult<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let &[frames_line, requests_line] = lines.as_slice() else {
            return Err(InputError::LineCount(lines.len()));
        };

        let frames_line = frames_line.trim();
        let frame_count: i64 = frames_line
            .parse()
            .map_err(|_| InputError::FrameCountNotInteger(frames_line.to_owned()))?;
        if frame_count < 1 {
            return Err(InputError::FrameCountNotPositive(frame_count));
        }
        let frame_count = usize::try_from(frame_count)
            .map_err(|_| InputError::FrameCountNotInteger(frames_line.to_owned()))?;

        let requests = requests_line
            .split_whitespace()
            .map(parse_page)
            .collect::<InputResult<Vec<_>>>()?;
        if requests.is_empty() {
            return Err(InputError::NoRequests);
        }

        Ok(Self::new(frame_count, requests))
    }
}

fn parse_page(token: &str) -> InputResult<Page> {
    let value: i64 = token
        .parse()
        .map_err(|_| InputError::PageNotInteger(token.to_owned()))?;
    if value < 1 {
        return Err(InputError::PageNotPositive(value));
    }
    Page::try_from(value).map_err(|_| InputError::PageNotInteger(token.to_owned()))
}

impl FromStr for Workload {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Workload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.frame_count)?;
        for (i, page) in self.requests.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{page}")?;
        }
        Ok(())
    }
}
