use regex::{Captures, Regex};

use crate::generator::GeneratorParser;
use crate::FixtureError;

/// Rewrites `<% ... %>` regions of raw fixture text into generator call expressions.
///
/// Rewriting happens on the raw text, before it is parsed, so the text outside the
/// markers still has to be valid JSON afterwards.
#[derive(Debug, Clone)]
pub struct ExpressionRewriter {
	pattern: Regex,
	generators: GeneratorParser,
}

impl ExpressionRewriter {
	/// Non-recursive, leftmost-first. Nested markers are not supported.
	const MARKER_PATTERN: &str = r"<%(.+?)%>";

	pub fn try_new(prefix: impl Into<String>) -> Result<Self, FixtureError> {
		let pattern = Regex::new(Self::MARKER_PATTERN).map_err(FixtureError::Pattern)?;
		Ok(Self { pattern, generators: GeneratorParser::try_new(prefix)? })
	}

	pub fn prefix(&self) -> &str {
		self.generators.prefix()
	}

	/// Parser for the call expressions this rewriter produces.
	pub fn generators(&self) -> &GeneratorParser {
		&self.generators
	}

	/// Replace every marker region with `<prefix><expression>`, appending `()` when
	/// the trimmed expression does not already end in a call or a `;`.
	pub fn rewrite(&self, raw: &str) -> String {
		self.pattern
			.replace_all(raw, |caps: &Captures<'_>| {
				let expression = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
				if expression.ends_with(')') || expression.ends_with(';') {
					format!("{}{}", self.prefix(), expression)
				} else {
					format!("{}{}()", self.prefix(), expression)
				}
			})
			.into_owned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn rewriter() -> Result<ExpressionRewriter, FixtureError> {
		ExpressionRewriter::try_new("faker.")
	}

	#[test]
	fn test_appends_call_suffix() -> Result<(), anyhow::Error> {
		let rewritten = rewriter()?.rewrite(r#"{"f": {"returns": "<% random.uuid %>"}}"#);
		assert_eq!(rewritten, r#"{"f": {"returns": "faker.random.uuid()"}}"#);
		Ok(())
	}

	#[test]
	fn test_keeps_existing_call_or_terminator() -> Result<(), anyhow::Error> {
		let rewriter = rewriter()?;
		assert_eq!(rewriter.rewrite("<%random.number(5)%>"), "faker.random.number(5)");
		assert_eq!(rewriter.rewrite("<% random.uuid; %>"), "faker.random.uuid;");
		Ok(())
	}

	#[test]
	fn test_multiple_markers_rewritten_independently() -> Result<(), anyhow::Error> {
		let rewritten = rewriter()?.rewrite("<% name.firstName %> <% name.lastName() %>");
		assert_eq!(rewritten, "faker.name.firstName() faker.name.lastName()");
		Ok(())
	}

	#[test]
	fn test_text_without_markers_is_untouched() -> Result<(), anyhow::Error> {
		let raw = r#"{"f": {"returns": "100% <real>"}}"#;
		assert_eq!(rewriter()?.rewrite(raw), raw);
		Ok(())
	}

	#[test]
	fn test_markers_do_not_span_lines() -> Result<(), anyhow::Error> {
		let raw = "<% random\n.uuid %>";
		assert_eq!(rewriter()?.rewrite(raw), raw);
		Ok(())
	}
}
