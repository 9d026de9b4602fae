//! Textual representations of permutations.
use std::fmt;

use crate::perm::Permutation;
use crate::El;

/// Layout used when turning a permutation into text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Format {
    /// The images in position order, e.g. `(3, 1, 2)`.
    #[default]
    Plain,
    /// Like [`Format::Plain`], but fixed points are shown as `_`, e.g. `(_, 3, 2)`.
    Cycle,
    /// The explicit mapping of every point, e.g. `(1 -> 3, 2 -> 1, 3 -> 2)`.
    Full,
}

impl Format {
    /// Look up a format by name.
    ///
    /// `"cycle"` and `"full"` select the corresponding formats, any other name selects
    /// [`Format::Plain`].
    pub fn parse(name: &str) -> Format {
        match name {
            "cycle" => Format::Cycle,
            "full" => Format::Full,
            _ => Format::Plain,
        }
    }
}

impl<'a> From<&'a str> for Format {
    fn from(name: &'a str) -> Format {
        Format::parse(name)
    }
}

/// A permutation paired with the [`Format`] used to display it.
#[derive(Clone, Copy)]
pub struct Formatted<'a> {
    perm: &'a Permutation,
    format: Format,
}

impl Permutation {
    /// Display this permutation using a given format.
    pub fn display(&self, format: Format) -> Formatted<'_> {
        Formatted { perm: self, format }
    }

    /// Display this permutation with fixed points replaced by `_`.
    pub fn cycle_display(&self) -> Formatted<'_> {
        self.display(Format::Cycle)
    }

    /// Render this permutation using a given format.
    pub fn to_string_with(&self, format: Format) -> String {
        self.display(format).to_string()
    }
}

impl<'a> fmt::Display for Formatted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("(")?;
        for (index, value) in self.perm.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            let point = index as El + 1;
            match self.format {
                Format::Cycle if value == point => f.write_str("_")?,
                Format::Plain | Format::Cycle => fmt::Display::fmt(&value, f)?,
                Format::Full => write!(f, "{} -> {}", point, value)?,
            }
        }
        f.write_str(")")
    }
}

impl<'a> fmt::Debug for Formatted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// The alternate flag (`{:#}`) selects [`Format::Cycle`].
impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let format = if f.alternate() {
            Format::Cycle
        } else {
            Format::Plain
        };
        fmt::Display::fmt(&self.display(format), f)
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.display(Format::Plain), f)
    }
}
