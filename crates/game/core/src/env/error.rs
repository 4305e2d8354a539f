//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::ids::{DropTableId, EquipmentId, LevelId, MonsterId, SkillId};

/// Errors raised when a content-table lookup references a missing id.
///
/// Content is validated at load time, so any of these at runtime means the
/// configuration shipped with a dangling reference the loader failed to
/// catch. They are fatal: the session cannot proceed without its tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Level definition was not found by id.
    #[error("level definition {0} not found")]
    LevelNotFound(LevelId),

    /// Monster definition was not found by id.
    #[error("monster definition {0} not found")]
    MonsterNotFound(MonsterId),

    /// Skill definition was not found by id.
    #[error("skill definition {0} not found")]
    SkillNotFound(SkillId),

    /// Equipment definition was not found by id.
    #[error("equipment definition {0} not found")]
    EquipmentNotFound(EquipmentId),

    /// Drop table definition was not found by id.
    #[error("drop table {0} not found")]
    DropTableNotFound(DropTableId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            LevelNotFound(_) => "ORACLE_LEVEL_NOT_FOUND",
            MonsterNotFound(_) => "ORACLE_MONSTER_NOT_FOUND",
            SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
            EquipmentNotFound(_) => "ORACLE_EQUIPMENT_NOT_FOUND",
            DropTableNotFound(_) => "ORACLE_DROP_TABLE_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_failures_are_fatal() {
        let err = OracleError::MonsterNotFound(MonsterId(7));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "ORACLE_MONSTER_NOT_FOUND");
        assert_eq!(err.severity().as_str(), "fatal");

        let err = OracleError::LevelNotFound(LevelId(3));
        assert_eq!(err.error_code(), "ORACLE_LEVEL_NOT_FOUND");
    }
}
