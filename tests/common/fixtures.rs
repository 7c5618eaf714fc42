//! Record kinds used across the integration suites.
//!
//! Both fixtures derive serde traits: in the surrounding system generated
//! records feed a mock layer that serializes them into response payloads.

use seeddb::{RecordId, Storable, ValueSource, ValueSourceExt};
use serde::{Deserialize, Serialize};

/// A user record: mandatory id plus synthesized personal attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
}

impl Storable for User {
    fn generate(id: RecordId, values: &mut dyn ValueSource) -> Self {
        Self {
            id: id.get(),
            first_name: values.next_string(8),
            last_name: values.next_string(10),
            age: values.int_in_range(18, 80),
        }
    }

    fn record_id(&self) -> RecordId {
        RecordId::new(self.id)
    }

    fn kind() -> &'static str {
        "User"
    }
}

/// A comment record with a body and a like counter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    pub likes: u64,
}

impl Storable for Comment {
    fn generate(id: RecordId, values: &mut dyn ValueSource) -> Self {
        Self {
            id: id.get(),
            text: values.next_string(24),
            likes: values.next_index(1_000) as u64,
        }
    }

    fn record_id(&self) -> RecordId {
        RecordId::new(self.id)
    }

    fn kind() -> &'static str {
        "Comment"
    }
}

/// Explicit-attribute constructor shorthand for test bodies.
pub fn user(id: u64, first_name: &str, last_name: &str, age: i64) -> User {
    User {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        age,
    }
}
