use std::fmt;

/// Location of a node inside the database, e.g. `/smartroom/fanStatus`.
///
/// Empty segments are dropped, so `smartroom`, `/smartroom/` and
/// `//smartroom` are the same path. The root is `/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<String>);

impl Path {
    pub fn root() -> Path {
        Path(vec![])
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// `segment` may itself contain slashes, as keys of a `patch` event do.
    pub fn child(&self, segment: &str) -> Path {
        let mut segments = self.0.clone();
        segments.extend(split(segment));
        Path(segments)
    }
}

fn split(path: &str) -> impl Iterator<Item = String> + '_ {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path(split(path).collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "/");
        }

        for segment in &self.0 {
            write!(f, "/{segment}")?;
        }

        Ok(())
    }
}
