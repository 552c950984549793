use thiserror::Error;

use crate::typesystem::TypeKey;

macro_rules! mismatch_error {
    // Type-only version, member filled in later by the accessor that performed the assignment
    ($expected:expr, $found:expr) => {
        crate::Error::TypeMismatch {
            member: String::new(),
            expected: $expected,
            found: $found.to_string(),
        }
    };

    // Member aware version
    ($member:expr, $expected:expr, $found:expr) => {
        crate::Error::TypeMismatch {
            member: $member.to_string(),
            expected: $expected,
            found: $found.to_string(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// A mapping call either completes, possibly with silent no-ops such as unmatched members, or
/// aborts at the first error it encounters. There is no member-level error collection; members
/// that were copied before the failure stay copied.
///
/// # Error Categories
///
/// ## Construction Errors
/// - [`Error::NoDefaultConstructor`] - A concrete or element type can not be instantiated
///
/// ## Assignment Errors
/// - [`Error::TypeMismatch`] - The source value is not assignable to the destination member
/// - [`Error::NullAssignment`] - A null value was assigned to a non-optional member
/// - [`Error::MemberNotWritable`] - The destination member is a read-only property
///
/// ## Policy Errors
/// - [`Error::DictionaryUnsupported`] - A dictionary member was mapped under a rejecting policy
/// - [`Error::RecursionLimit`] - The configured recursion limit was exceeded
/// - [`Error::BatchLength`] - Batch mapping was given slices of different lengths
///
/// # Examples
///
/// ```rust
/// use mapscope::Error;
///
/// let error = Error::NoDefaultConstructor("app::Widget".to_string());
/// match error {
///     Error::NoDefaultConstructor(name) => assert_eq!(name, "app::Widget"),
///     other => panic!("unexpected error: {other}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The type has no registered default constructor.
    ///
    /// Raised when the engine has to instantiate a concrete type for an interface binding, or a
    /// destination element type for a collection conversion, and the type description carries no
    /// constructor. The associated value is the fully qualified type name.
    #[error("Type {0} has no default constructor")]
    NoDefaultConstructor(String),

    /// The source value can not be assigned to the destination member.
    ///
    /// No coercion is ever attempted between scalar types, so this is raised whenever a matched
    /// member pair disagrees on its type.
    ///
    /// # Fields
    ///
    /// * `member` - Qualified name of the destination member (`Owner.member`)
    /// * `expected` - Type the member accepts
    /// * `found` - Runtime type of the offered value
    #[error("Cannot assign {found} to {member} - expected {expected}")]
    TypeMismatch {
        /// The destination member
        member: String,
        /// The type the member accepts
        expected: &'static str,
        /// The runtime type of the offered value
        found: String,
    },

    /// A null value was assigned to a member that can not hold one.
    ///
    /// Only `Option<T>` members accept null; every other member type fails with this error.
    #[error("Cannot assign null to {member} - expected {expected}")]
    NullAssignment {
        /// The destination member
        member: String,
        /// The type the member accepts
        expected: &'static str,
    },

    /// The destination member has no setter.
    #[error("Member {owner}.{member} is not writable")]
    MemberNotWritable {
        /// The owning type of the member
        owner: String,
        /// The member name
        member: &'static str,
    },

    /// A dictionary-valued member was mapped while the mapper rejects dictionaries.
    #[error("Dictionary-valued member {0} can not be mapped")]
    DictionaryUnsupported(String),

    /// Recursion limit reached.
    ///
    /// Only raised when a limit was configured; the associated value is that limit.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),

    /// Batch mapping was handed source and destination slices of different lengths.
    #[error("Batch length mismatch - {sources} sources for {dests} destinations")]
    BatchLength {
        /// Number of source objects
        sources: usize,
        /// Number of destination objects
        dests: usize,
    },
}

impl Error {
    /// Attach the destination member to an assignment error that was raised without one.
    ///
    /// Errors that already name a member, and all other variants, are returned unchanged.
    ///
    /// ## Arguments
    /// * `owner` - The type that declares the member
    /// * `member` - The member name
    #[must_use]
    pub fn in_member(self, owner: &TypeKey, member: &str) -> Self {
        match self {
            Error::TypeMismatch {
                member: current,
                expected,
                found,
            } if current.is_empty() => Error::TypeMismatch {
                member: format!("{}.{}", owner.name(), member),
                expected,
                found,
            },
            Error::NullAssignment {
                member: current,
                expected,
            } if current.is_empty() => Error::NullAssignment {
                member: format!("{}.{}", owner.name(), member),
                expected,
            },
            other => other,
        }
    }
}
