use crate::db::gateway::Gateway;
use crate::db::models::{ProfileAttributes, ProfileRow, SurveyAttributes, SurveyRow};
use crate::db::schema::{self, Table};
use crate::error::BuzzError;
use serde::Serialize;
use sqlx::FromRow;
use sqlx::sqlite::SqliteRow;
use std::marker::PhantomData;

/// A persistable entity: one logical table plus its typed record and row
/// shapes.
pub trait Entity {
    const TABLE: Table;
    type Attributes: Serialize;
    type Row: for<'r> FromRow<'r, SqliteRow> + Send + Unpin;
}

pub struct Profile;

impl Entity for Profile {
    const TABLE: Table = Table::Profiles;
    type Attributes = ProfileAttributes;
    type Row = ProfileRow;
}

pub struct Survey;

impl Entity for Survey {
    const TABLE: Table = Table::Surveys;
    type Attributes = SurveyAttributes;
    type Row = SurveyRow;
}

/// Entity-scoped create/read facade over the gateway and generator. No
/// update or delete exists; mutation would be layered on later under the
/// same column contract.
pub struct Repository<E: Entity> {
    gateway: Gateway,
    _entity: PhantomData<E>,
}

pub type ProfileRepository = Repository<Profile>;
pub type SurveyRepository = Repository<Survey>;

impl<E: Entity> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> Repository<E> {
    pub fn new(gateway: Gateway) -> Self {
        Self {
            gateway,
            _entity: PhantomData,
        }
    }

    /// Create the backing table if it does not exist yet. Safe to run on
    /// every startup; bootstrap treats a rejection here as fatal.
    pub async fn create_table(&self) -> Result<(), BuzzError> {
        self.gateway
            .execute(&schema::create_table_sql(E::TABLE), Vec::new())
            .await
    }

    /// Insert one record. Missing attributes persist as NULL; failures
    /// surface to the caller unretried.
    pub async fn create_record(&self, attributes: &E::Attributes) -> Result<(), BuzzError> {
        let values = schema::extract_values(E::TABLE, attributes)?;
        self.gateway
            .execute(&schema::insert_sql(E::TABLE), values)
            .await
    }

    /// Every stored row, in the order the driver returns them. Callers
    /// wanting the most recent record take the last element.
    pub async fn find_all(&self) -> Result<Vec<E::Row>, BuzzError> {
        self.gateway
            .fetch_all(&schema::select_all_sql(E::TABLE))
            .await
    }
}
