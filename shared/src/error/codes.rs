//! Unified error codes for the reservation service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Account / authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Company errors
//! - 4xxx: Reservation errors
//! - 6xxx: Menu and photo errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so clients can switch on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,

    // ==================== 1xxx: Account ====================
    /// No acting user on the request
    NotAuthenticated = 1001,
    /// Account is disabled
    AccountDisabled = 1007,
    /// Email already registered
    EmailAlreadyRegistered = 1010,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Operation requires a company account
    CompanyRequired = 2002,
    /// Operation requires a customer account
    CustomerRequired = 2003,

    // ==================== 3xxx: Company ====================
    /// Company not found
    CompanyNotFound = 3001,
    /// Work hours are not a valid range
    InvalidWorkHours = 3002,

    // ==================== 4xxx: Reservation ====================
    /// Time slot not found on the table
    TimeSlotNotFound = 4002,
    /// Time slot already reserved
    TimeSlotReserved = 4003,
    /// Date is outside the table's booking horizon
    DateNotAvailable = 4004,
    /// Party does not fit the table
    TableCapacityExceeded = 4005,

    // ==================== 6xxx: Menu / Photo ====================
    /// Menu item not found
    MenuNotFound = 6001,
    /// Menu category not found
    MenuCategoryNotFound = 6002,
    /// Menu item has invalid price
    MenuInvalidPrice = 6003,
    /// Photo not found
    PhotoNotFound = 6101,

    // ==================== 7xxx: Table ====================
    /// Table not found
    TableNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",

            // Account
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::AccountDisabled => "Account is disabled",
            ErrorCode::EmailAlreadyRegistered => "Email is already registered",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::CompanyRequired => "A company account is required",
            ErrorCode::CustomerRequired => "A customer account is required",

            // Company
            ErrorCode::CompanyNotFound => "Company not found",
            ErrorCode::InvalidWorkHours => "Work hours must start before they end",

            // Reservation
            ErrorCode::TimeSlotNotFound => "Time slot not found",
            ErrorCode::TimeSlotReserved => "Time slot is already reserved",
            ErrorCode::DateNotAvailable => "Date is not available for this table",
            ErrorCode::TableCapacityExceeded => "Party size exceeds table capacity",

            // Menu / Photo
            ErrorCode::MenuNotFound => "Menu item not found",
            ErrorCode::MenuCategoryNotFound => "Menu category not found",
            ErrorCode::MenuInvalidPrice => "Menu item has invalid price",
            ErrorCode::PhotoNotFound => "Photo not found",

            // Table
            ErrorCode::TableNotFound => "Table not found",

            // System
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),

            // Account
            1001 => Ok(ErrorCode::NotAuthenticated),
            1007 => Ok(ErrorCode::AccountDisabled),
            1010 => Ok(ErrorCode::EmailAlreadyRegistered),

            // Permission
            2001 => Ok(ErrorCode::PermissionDenied),
            2002 => Ok(ErrorCode::CompanyRequired),
            2003 => Ok(ErrorCode::CustomerRequired),

            // Company
            3001 => Ok(ErrorCode::CompanyNotFound),
            3002 => Ok(ErrorCode::InvalidWorkHours),

            // Reservation
            4002 => Ok(ErrorCode::TimeSlotNotFound),
            4003 => Ok(ErrorCode::TimeSlotReserved),
            4004 => Ok(ErrorCode::DateNotAvailable),
            4005 => Ok(ErrorCode::TableCapacityExceeded),

            // Menu / Photo
            6001 => Ok(ErrorCode::MenuNotFound),
            6002 => Ok(ErrorCode::MenuCategoryNotFound),
            6003 => Ok(ErrorCode::MenuInvalidPrice),
            6101 => Ok(ErrorCode::PhotoNotFound),

            // Table
            7001 => Ok(ErrorCode::TableNotFound),

            // System
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
