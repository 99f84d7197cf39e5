use crate::{Cursor, SyntaxError};

/// Result of applying one grammar rule at a cursor.
///
/// Rules compose on the difference between the first two variants:
/// [`Unrecognized`] means the rule does not apply here and the caller may try
/// something else from the same position, while [`Invalid`] means the rule did
/// apply and the input is malformed, which aborts the whole parse.
///
/// [`Unrecognized`]: Outcome::Unrecognized
/// [`Invalid`]: Outcome::Invalid
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome<'src, T> {
    /// The rule does not start at this position.
    Unrecognized,
    /// The rule started here but the input breaks the grammar.
    Invalid(SyntaxError),
    /// The rule matched. The cursor sits just past the consumed input.
    Valid(T, Cursor<'src>),
}

impl<'src, T> Outcome<'src, T> {
    /// Returns `true` if the outcome is [`Valid`](Outcome::Valid).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(..))
    }

    /// Returns `true` if the outcome is [`Invalid`](Outcome::Invalid).
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(..))
    }

    /// Returns `true` if the outcome is [`Unrecognized`](Outcome::Unrecognized).
    #[must_use]
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, Self::Unrecognized)
    }

    /// Transforms the matched value, leaving the cursor and failures alone.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<'src, U> {
        match self {
            Self::Unrecognized => Outcome::Unrecognized,
            Self::Invalid(e) => Outcome::Invalid(e),
            Self::Valid(v, cursor) => Outcome::Valid(f(v), cursor),
        }
    }

    /// Escalates [`Unrecognized`](Outcome::Unrecognized) to `err`.
    ///
    /// For callers where the grammar demands a value, so a rule that does not
    /// apply is a syntax error rather than a cue to try something else.
    pub fn or_invalid(self, err: SyntaxError) -> Self {
        match self {
            Self::Unrecognized => Self::Invalid(err),
            other => other,
        }
    }

    /// Converts into the three-way `Result` that `?` can propagate through.
    ///
    /// `Ok(None)` is [`Unrecognized`](Outcome::Unrecognized).
    pub fn into_result(self) -> Result<Option<(T, Cursor<'src>)>, SyntaxError> {
        match self {
            Self::Unrecognized => Ok(None),
            Self::Invalid(e) => Err(e),
            Self::Valid(v, cursor) => Ok(Some((v, cursor))),
        }
    }

    /// The value and cursor if the rule matched.
    #[must_use]
    pub fn into_valid(self) -> Option<(T, Cursor<'src>)> {
        match self {
            Self::Valid(v, cursor) => Some((v, cursor)),
            _ => None,
        }
    }

    /// The diagnostic if the rule failed.
    #[must_use]
    pub fn invalid(&self) -> Option<SyntaxError> {
        match self {
            Self::Invalid(e) => Some(*e),
            _ => None,
        }
    }
}

/// Builds an [`Outcome::Invalid`], logging where the rule gave up.
///
/// The position is only logged; it is not part of the outcome.
pub(crate) fn reject<T>(err: SyntaxError, at: Cursor<'_>) -> Outcome<'_, T> {
    log::debug!("invalid input at byte {}: {err}", at.position());
    Outcome::Invalid(err)
}

impl<'src, T> From<Result<Option<(T, Cursor<'src>)>, SyntaxError>> for Outcome<'src, T> {
    fn from(r: Result<Option<(T, Cursor<'src>)>, SyntaxError>) -> Self {
        match r {
            Ok(None) => Self::Unrecognized,
            Ok(Some((v, cursor))) => Self::Valid(v, cursor),
            Err(e) => Self::Invalid(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn or_invalid_only_touches_unrecognized() {
        let cursor = Cursor::new("1");
        let err = SyntaxError::NonValueInArray;

        let escalated: Outcome<'_, ()> = Outcome::Unrecognized.or_invalid(err);
        assert_eq!(escalated, Outcome::Invalid(err));

        let kept: Outcome<'_, ()> =
            Outcome::Invalid(SyntaxError::MissingColon).or_invalid(err);
        assert_eq!(kept.invalid(), Some(SyntaxError::MissingColon));

        let valid = Outcome::Valid((), cursor).or_invalid(err);
        assert!(valid.is_valid());
    }

    #[test]
    fn result_conversion_round_trips_every_state() {
        let cursor = Cursor::at("ab", 1);
        for outcome in [
            Outcome::Unrecognized,
            Outcome::Invalid(SyntaxError::UnterminatedString),
            Outcome::Valid(7, cursor),
        ] {
            assert_eq!(Outcome::from(outcome.clone().into_result()), outcome);
        }
    }
}
