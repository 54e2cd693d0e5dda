use core::fmt;

use super::ArrayMd;
use crate::Dimension;

const NUM_EDGE_ELEMENTS: usize = 3;
const TRUNCATION_THRESHOLD: usize = 1_000;

struct FormatOption {
    num_edge_elements: usize,
}

impl Default for FormatOption {
    fn default() -> Self {
        Self {
            num_edge_elements: NUM_EDGE_ELEMENTS,
        }
    }
}

impl FormatOption {
    fn new(array_len: usize, alternate: bool) -> Self {
        Self::default().without_truncation(alternate || array_len < TRUNCATION_THRESHOLD)
    }

    fn without_truncation(mut self, valid: bool) -> Self {
        if valid {
            self.num_edge_elements = usize::MAX / 2;
        }
        self
    }
}

/// Writes the row-major block `elems` of shape `extents` as nested brackets.
fn format_block<T, F>(
    elems: &[T],
    extents: &[usize],
    indent: usize,
    option: &FormatOption,
    f: &mut fmt::Formatter<'_>,
    fmt: &mut F,
) -> fmt::Result
where
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let rank = extents.len();
    if elems.is_empty() {
        return write!(f, "{}{}", "[".repeat(rank), "]".repeat(rank));
    }

    let (len, inner) = match extents.split_first() {
        Some((&len, inner)) => (len, inner),
        None => return fmt(&elems[0], f),
    };
    let block = elems.len() / len;
    let mut write_row = |i: usize, f: &mut fmt::Formatter<'_>| {
        format_block(
            &elems[i * block..(i + 1) * block],
            inner,
            indent + 1,
            option,
            f,
            &mut *fmt,
        )
    };

    f.write_str("[")?;
    if len > option.num_edge_elements * 2 {
        for i in 0..option.num_edge_elements {
            fmt_indent(i, rank, indent, f)?;
            write_row(i, f)?;
        }
        fmt_indent(1, rank, indent, f)?;
        f.write_str("...")?;
        for i in len - option.num_edge_elements..len {
            fmt_indent(1, rank, indent, f)?;
            write_row(i, f)?;
        }
    } else {
        for i in 0..len {
            fmt_indent(i, rank, indent, f)?;
            write_row(i, f)?;
        }
    }
    f.write_str("]")
}

fn fmt_indent(i: usize, rank: usize, indent: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if i != 0 {
        f.write_str(",")?;
        if rank > 1 {
            write!(f, "{}", "\n".repeat(rank - 1))?;
            write!(f, "{}", " ".repeat(indent))?;
        } else {
            f.write_str(" ")?;
        }
    }
    Ok(())
}

fn format_array<T, D, F>(
    array: &ArrayMd<T, D>,
    f: &mut fmt::Formatter<'_>,
    mut fmt: F,
) -> fmt::Result
where
    D: Dimension,
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let option = FormatOption::new(array.len(), f.alternate());
    format_block(array.as_slice(), &array.extents(), 1, &option, f, &mut fmt)
}

macro_rules! impl_fmt {
    ($trait:ident) => {
        impl<T, D> fmt::$trait for ArrayMd<T, D>
        where
            D: Dimension,
            T: fmt::$trait,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                format_array(self, f, <T as fmt::$trait>::fmt)
            }
        }
    };
}

impl_fmt!(Binary);
impl_fmt!(Display);
impl_fmt!(LowerExp);
impl_fmt!(LowerHex);
impl_fmt!(Octal);
impl_fmt!(UpperExp);
impl_fmt!(UpperHex);

impl<T, D> fmt::Debug for ArrayMd<T, D>
where
    D: Dimension,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_array(self, f, <T as fmt::Debug>::fmt)?;
        write!(f, ", shape={:?}", self.extents())
    }
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use alloc::{format, string::String, vec::Vec};

    use crate::ArrayMd;

    #[test]
    fn format_empty_arrays() {
        let a1 = ArrayMd::<usize, dims![0]>::default();
        let a2 = ArrayMd::<usize, dims![0, 2]>::default();
        let a3 = ArrayMd::<usize, dims![0, 2, 4]>::default();

        assert_eq!(format!("{}", a1), "[]");
        assert_eq!(format!("{}", a2), "[[]]");
        assert_eq!(format!("{}", a3), "[[[]]]");
    }

    #[test]
    fn format_0d_array() {
        let a0 = ArrayMd::<usize, dims![]>::from_data(1);

        assert_eq!(format!("{}", a0), "1");
        assert_eq!(format!("{:?}", a0), "1, shape=[]");
    }

    #[test]
    fn format_1d_array() {
        const N: usize = super::TRUNCATION_THRESHOLD + 10;
        let a1 = ArrayMd::<i32, dims![N]>::ones();

        assert_eq!(format!("{}", a1), "[1, 1, 1, ..., 1, 1, 1]");
        assert_eq!(format!("{:#}", a1), format!("[{}]", ["1"; N].join(", ")));
    }

    #[test]
    fn format_2d_array() {
        let a2 = ArrayMd::<u8, dims![2, 3]>::from_fn(|i| i as u8 * 5);

        assert_eq!(format!("{}", a2), "[[0, 5, 10],\n [15, 20, 25]]");
        assert_eq!(format!("{:x}", a2), "[[0, 5, a],\n [f, 14, 19]]");
        assert_eq!(
            format!("{:?}", a2),
            "[[0, 5, 10],\n [15, 20, 25]], shape=[2, 3]"
        );
    }

    #[test]
    fn truncate_only_long_axes() {
        let a2 = ArrayMd::<usize, dims![200, 5]>::from_fn(|i| i);
        let text = format!("{}", a2);
        let rows: Vec<&str> = text.lines().collect();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], "[[0, 1, 2, 3, 4],");
        assert_eq!(rows[3], " ...,");
        assert_eq!(rows[6], " [995, 996, 997, 998, 999]]");
    }

    #[test]
    fn format_3d_array() {
        let a3 = ArrayMd::<i32, dims![10, 10, 10]>::ones();
        let block = "\
[[1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  ...,
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1],
  [1, 1, 1, ..., 1, 1, 1]]";
        let expected = format!(
            "[{b},\n\n {b},\n\n {b},\n\n ...,\n\n {b},\n\n {b},\n\n {b}]",
            b = block
        );

        assert_eq!(format!("{}", a3), expected);

        let full: String = format!("{:#}", a3);
        assert!(!full.contains("..."));
    }
}
