//! Positional placeholder substitution.

use alloc::vec::Vec;

use bstr::{BString, ByteSlice};

use crate::{error::Error, render::Render};

/// Renders `template`, substituting each placeholder with an argument.
///
/// `{}` takes the next argument in order; `{d}` (a single decimal digit)
/// takes the argument at that index without advancing the implicit counter,
/// so the two styles mix freely. Indices above 9 are unsupported.
///
/// ```
/// use chartape::render;
///
/// assert_eq!(render(b"{}-{}", &["a", "b"]).unwrap(), "a-b");
/// assert_eq!(render(b"{1}-{}", &["a", "b"]).unwrap(), "b-a");
/// ```
///
/// The byte after a placeholder's index is assumed to be the closing `}` and
/// is skipped without being checked; a template with a missing closer is not
/// rejected, it just swallows one byte. This matches the behavior scripted
/// hosts have come to rely on and is deliberately left permissive.
///
/// # Errors
///
/// [`Error::TooManyFormatItems`] if a placeholder resolves at or past the end
/// of `args`. Nothing is returned partially; output accumulated before the
/// failing placeholder is discarded.
pub fn render<V: Render>(template: &[u8], args: &[V]) -> Result<BString, Error> {
    let mut out = Vec::new();
    let mut auto = 0;
    let mut from = 0;

    while let Some(rel) = template[from..].find_byte(b'{') {
        let open = from + rel;
        out.extend_from_slice(&template[from..open]);

        let mut at = open + 1;
        let index = match template.get(at) {
            Some(digit) if digit.is_ascii_digit() => {
                at += 1;
                usize::from(digit - b'0')
            }
            _ => {
                auto += 1;
                auto - 1
            }
        };
        if index >= args.len() {
            return Err(Error::TooManyFormatItems);
        }

        // One unchecked byte for the closer; a trailing `{` clamps here.
        from = (at + 1).min(template.len());
        args[index].render_to(&mut out);
    }

    out.extend_from_slice(&template[from..]);
    Ok(out.into())
}
