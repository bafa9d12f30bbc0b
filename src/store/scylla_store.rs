use anyhow::Result;
use async_trait::async_trait;
use scylla::client::session::Session;
use scylla::client::session_builder::SessionBuilder;
use std::sync::Arc;

use super::customer_store::{new_customer_id, CustomerStore};
use crate::domain::customer::Customer;

// ============================================================================
// ScyllaDB Customer Store
// ============================================================================
//
// One row per customer document in `customers`, keyed by a text id.
// Secondary indexes on `email` and `city` serve the lookup queries.
//
// ============================================================================

const SELECT_COLUMNS: &str = "SELECT id, firstname, lastname, email, phone, gender, city FROM customers";

/// Raw row shape; non-key columns may be null for rows written elsewhere
type CustomerRow = (
    String,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
    Option<String>,
);

pub struct ScyllaCustomerStore {
    session: Arc<Session>,
}

impl ScyllaCustomerStore {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    /// Connect to the cluster, ensure the schema exists and switch to the keyspace
    pub async fn connect(nodes: &[String], keyspace: &str) -> Result<Self> {
        tracing::info!(nodes = ?nodes, keyspace = %keyspace, "Connecting to ScyllaDB...");

        let mut builder = SessionBuilder::new();
        for node in nodes {
            builder = builder.known_node(node);
        }
        let session = builder.build().await?;

        init_schema(&session, keyspace).await?;

        Ok(Self::new(Arc::new(session)))
    }

    async fn query_customers(
        &self,
        query: String,
        values: impl scylla::serialize::row::SerializeRow,
    ) -> Result<Vec<Customer>> {
        let result = self.session.query_unpaged(query, values).await?;

        let rows_result = match result.into_rows_result() {
            Ok(rows) => rows,
            Err(_) => return Ok(Vec::new()),
        };

        let mut customers = Vec::new();
        for row in rows_result.rows::<CustomerRow>()? {
            customers.push(row_to_customer(row?));
        }
        Ok(customers)
    }
}

/// Create keyspace, table and lookup indexes if missing
pub async fn init_schema(session: &Session, keyspace: &str) -> Result<()> {
    session
        .query_unpaged(
            format!(
                "CREATE KEYSPACE IF NOT EXISTS {} WITH REPLICATION = \
                 {{'class': 'SimpleStrategy', 'replication_factor': 1}}",
                keyspace
            ),
            &[],
        )
        .await?;

    session.use_keyspace(keyspace, false).await?;

    session
        .query_unpaged(
            "CREATE TABLE IF NOT EXISTS customers (
                id text PRIMARY KEY,
                firstname text,
                lastname text,
                email text,
                phone text,
                gender text,
                city text
            )",
            &[],
        )
        .await?;

    session
        .query_unpaged("CREATE INDEX IF NOT EXISTS customers_email_idx ON customers (email)", &[])
        .await?;
    session
        .query_unpaged("CREATE INDEX IF NOT EXISTS customers_city_idx ON customers (city)", &[])
        .await?;

    tracing::info!(keyspace = %keyspace, "✅ Customer schema ready");
    Ok(())
}

fn row_to_customer(row: CustomerRow) -> Customer {
    let (id, firstname, lastname, email, phone, gender, city) = row;
    Customer {
        id: Some(id),
        firstname: firstname.unwrap_or_default(),
        lastname: lastname.unwrap_or_default(),
        email: email.unwrap_or_default(),
        phone: phone.unwrap_or_default(),
        gender: gender.unwrap_or_default(),
        city: city.unwrap_or_default(),
    }
}

#[async_trait]
impl CustomerStore for ScyllaCustomerStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let mut found = self
            .query_customers(format!("{} WHERE id = ?", SELECT_COLUMNS), (id,))
            .await?;
        Ok(found.pop())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let found = self
            .query_customers(format!("{} WHERE email = ?", SELECT_COLUMNS), (email,))
            .await?;
        if found.len() > 1 {
            tracing::warn!(email = %email, count = found.len(), "Multiple customers share one email");
        }
        Ok(found.into_iter().next())
    }

    async fn find_by_city(&self, city: &str) -> Result<Vec<Customer>> {
        self.query_customers(format!("{} WHERE city = ?", SELECT_COLUMNS), (city,))
            .await
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        self.query_customers(SELECT_COLUMNS.to_string(), ()).await
    }

    async fn save(&self, mut customer: Customer) -> Result<Customer> {
        let id = customer.id.get_or_insert_with(new_customer_id).clone();

        // INSERT is an upsert in CQL: same id replaces the row
        self.session
            .query_unpaged(
                "INSERT INTO customers (id, firstname, lastname, email, phone, gender, city)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                (
                    id.as_str(),
                    customer.firstname.as_str(),
                    customer.lastname.as_str(),
                    customer.email.as_str(),
                    customer.phone.as_str(),
                    customer.gender.as_str(),
                    customer.city.as_str(),
                ),
            )
            .await?;

        tracing::debug!(customer_id = %id, "Saved customer row");
        Ok(customer)
    }

    async fn exists_by_id(&self, id: &str) -> Result<bool> {
        let result = self
            .session
            .query_unpaged("SELECT id FROM customers WHERE id = ?", (id,))
            .await?;

        let rows_result = match result.into_rows_result() {
            Ok(rows) => rows,
            Err(_) => return Ok(false),
        };

        Ok(rows_result.maybe_first_row::<(String,)>()?.is_some())
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        self.session
            .query_unpaged("DELETE FROM customers WHERE id = ?", (id,))
            .await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "scylla"
    }
}
