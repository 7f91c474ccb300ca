use crate::error::{FixError, Result};
use regex::Regex;
use std::borrow::Cow;

/// A compiled call-site pattern targeting a two-argument call whose second
/// argument is a boolean literal.
#[derive(Debug)]
pub struct CallPattern {
	/// The dotted callee name whose call sites are rewritten.
	callee: String,

	/// Compiled regex matching `<callee>(<arg>, true|false)`.
	pattern: Regex,
}

impl CallPattern {
	/// Compile the pattern for the given callee.
	///
	/// Matches `<callee>(<arg>, true)` and `<callee>(<arg>, false)`, where
	/// `<arg>` may span multiple lines and may contain one level of nested
	/// balanced parentheses. Deeper nesting in the first argument is not
	/// matched and the call site is left as-is.
	pub fn trailing_bool(callee: &str) -> Result<Self> {
		let escaped = regex::escape(callee);
		let expr = format!(r"{escaped}\(((?:[^()]|\([^()]*\))*?),\s*(?:true|false)\s*\)");

		let pattern = Regex::new(&expr).map_err(|source| FixError::InvalidPattern {
			callee: callee.to_string(),
			source,
		})?;

		Ok(CallPattern {
			callee: callee.to_string(),
			pattern,
		})
	}

	/// Rewrite every matching call site in `input` to the one-argument form.
	///
	/// Returns the input unchanged (borrowed) when nothing matches.
	pub fn rewrite<'a>(&self, input: &'a str) -> Cow<'a, str> {
		self.pattern.replace_all(input, |caps: &regex::Captures| {
			format!("{}({})", self.callee, &caps[1])
		})
	}
}
