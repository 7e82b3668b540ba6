//! Entity/DTO conversion
//!
//! Mapping layer between the storage model ([`Employee`]) and the wire model
//! ([`EmployeeDto`]). Conversions copy fields verbatim; the merge used by the
//! update path overwrites every mutable field — there are no partial-field
//! semantics.

use surrealdb::RecordId;
use uuid::Uuid;

use crate::db::models::{EMPLOYEE_TABLE, Employee, EmployeeDto};

/// Build a storage entity from a wire DTO
pub fn to_entity(dto: EmployeeDto) -> Employee {
    Employee {
        id: dto.id.map(record_id),
        email: dto.email,
        first_name: dto.first_name,
        last_name: dto.last_name,
    }
}

/// Build a wire DTO from a storage entity
pub fn to_dto(entity: Employee) -> EmployeeDto {
    EmployeeDto {
        id: entity.id.as_ref().and_then(key_as_uuid),
        email: entity.email,
        first_name: entity.first_name,
        last_name: entity.last_name,
    }
}

/// Overwrite the entity's fields with the DTO's values (id only when present
/// on the DTO); returns the mutated entity
pub fn merge_into_entity(dto: EmployeeDto, mut entity: Employee) -> Employee {
    if let Some(id) = dto.id {
        entity.id = Some(record_id(id));
    }
    entity.email = dto.email;
    entity.first_name = dto.first_name;
    entity.last_name = dto.last_name;
    entity
}

/// `employee:<uuid>` record id for a wire UUID.
///
/// The hyphen-free form keeps the key plain alphanumeric so it round-trips
/// through SurrealDB without escaping.
pub fn record_id(id: Uuid) -> RecordId {
    RecordId::from_table_key(EMPLOYEE_TABLE, id.simple().to_string())
}

/// Parse the UUID key back out of a record id
pub fn key_as_uuid(id: &RecordId) -> Option<Uuid> {
    let key = id.key().to_string();
    key.trim_matches(|c| c == '⟨' || c == '⟩').parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(id: Option<Uuid>) -> EmployeeDto {
        EmployeeDto {
            id,
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    #[test]
    fn to_entity_copies_fields_verbatim() {
        let id = Uuid::new_v4();
        let entity = to_entity(dto(Some(id)));

        assert_eq!(entity.id, Some(record_id(id)));
        assert_eq!(entity.email, "ada@example.com");
        assert_eq!(entity.first_name, "Ada");
        assert_eq!(entity.last_name, "Lovelace");
    }

    #[test]
    fn to_entity_without_id_leaves_id_unset() {
        assert_eq!(to_entity(dto(None)).id, None);
    }

    #[test]
    fn to_dto_round_trips_the_record_id() {
        let id = Uuid::new_v4();
        let round_tripped = to_dto(to_entity(dto(Some(id))));
        assert_eq!(round_tripped, dto(Some(id)));
    }

    #[test]
    fn merge_overwrites_every_field() {
        let original_id = Uuid::new_v4();
        let existing = to_entity(dto(Some(original_id)));

        let replacement = EmployeeDto {
            id: Some(original_id),
            email: "grace@example.com".to_string(),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
        };
        let merged = merge_into_entity(replacement, existing);

        assert_eq!(merged.id, Some(record_id(original_id)));
        assert_eq!(merged.email, "grace@example.com");
        assert_eq!(merged.first_name, "Grace");
        assert_eq!(merged.last_name, "Hopper");
    }

    #[test]
    fn merge_keeps_the_entity_id_when_dto_has_none() {
        let id = Uuid::new_v4();
        let existing = to_entity(dto(Some(id)));
        let merged = merge_into_entity(dto(None), existing);
        assert_eq!(merged.id, Some(record_id(id)));
    }
}
