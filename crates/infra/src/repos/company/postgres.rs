use super::ICompanyRepo;
use crate::repos::shared::repo::RepoError;
use chrono::NaiveDate;
use company_registry_domain::{Company, CompanyPatch, CompanyProfile, ID};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use tracing::{error, warn};

pub struct PostgresCompanyRepo {
    pool: PgPool,
}

impl PostgresCompanyRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CompanyRaw {
    id: i64,
    company_name: String,
    corporate_philosophy: Option<String>,
    ceo_name: Option<String>,
    headquarters: Option<String>,
    founded_date: Option<NaiveDate>,
    employees: Option<i32>,
    major_clients: Option<String>,
    capital: Option<i64>,
    sales: Option<i64>,
    roe: Option<f64>,
    operating_profit_margin: Option<f64>,
    main_business: Option<String>,
    strengths: Option<String>,
    weaknesses: Option<String>,
    target_customers: Option<String>,
    ideal_candidate: Option<String>,
    recruiting_positions: Option<String>,
    hiring_count: Option<i32>,
    starting_salary: Option<i64>,
    bonus: Option<String>,
    work_location: Option<String>,
    working_hours: Option<String>,
    annual_holidays: Option<i32>,
    benefits: Option<String>,
    turnover_rate: Option<f64>,
    average_age: Option<f64>,
    average_annual_salary: Option<i64>,
    notes: Option<String>,
}

impl From<CompanyRaw> for Company {
    fn from(e: CompanyRaw) -> Self {
        Self {
            id: e.id.into(),
            profile: CompanyProfile {
                company_name: e.company_name,
                corporate_philosophy: e.corporate_philosophy,
                ceo_name: e.ceo_name,
                headquarters: e.headquarters,
                founded_date: e.founded_date,
                employees: e.employees,
                major_clients: e.major_clients,
                capital: e.capital,
                sales: e.sales,
                roe: e.roe,
                operating_profit_margin: e.operating_profit_margin,
                main_business: e.main_business,
                strengths: e.strengths,
                weaknesses: e.weaknesses,
                target_customers: e.target_customers,
                ideal_candidate: e.ideal_candidate,
                recruiting_positions: e.recruiting_positions,
                hiring_count: e.hiring_count,
                starting_salary: e.starting_salary,
                bonus: e.bonus,
                work_location: e.work_location,
                working_hours: e.working_hours,
                annual_holidays: e.annual_holidays,
                benefits: e.benefits,
                turnover_rate: e.turnover_rate,
                average_age: e.average_age,
                average_annual_salary: e.average_annual_salary,
                notes: e.notes,
            },
        }
    }
}

/// A typed column value waiting to be bound
enum Column {
    Text(Option<String>),
    Int(Option<i32>),
    BigInt(Option<i64>),
    Float(Option<f64>),
    Date(Option<NaiveDate>),
}

impl Column {
    fn push_bind(self, query: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Column::Text(v) => query.push_bind(v),
            Column::Int(v) => query.push_bind(v),
            Column::BigInt(v) => query.push_bind(v),
            Column::Float(v) => query.push_bind(v),
            Column::Date(v) => query.push_bind(v),
        };
    }
}

/// Column names and values for every field present in the patch.
/// Column names only ever come from here.
fn columns(patch: &CompanyPatch) -> Vec<(&'static str, Column)> {
    let mut columns = Vec::new();
    if let Some(v) = &patch.company_name {
        columns.push(("company_name", Column::Text(Some(v.clone()))));
    }
    if let Some(v) = &patch.corporate_philosophy {
        columns.push(("corporate_philosophy", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.ceo_name {
        columns.push(("ceo_name", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.headquarters {
        columns.push(("headquarters", Column::Text(v.clone())));
    }
    if let Some(v) = patch.founded_date {
        columns.push(("founded_date", Column::Date(v)));
    }
    if let Some(v) = patch.employees {
        columns.push(("employees", Column::Int(v)));
    }
    if let Some(v) = &patch.major_clients {
        columns.push(("major_clients", Column::Text(v.clone())));
    }
    if let Some(v) = patch.capital {
        columns.push(("capital", Column::BigInt(v)));
    }
    if let Some(v) = patch.sales {
        columns.push(("sales", Column::BigInt(v)));
    }
    if let Some(v) = patch.roe {
        columns.push(("roe", Column::Float(v)));
    }
    if let Some(v) = patch.operating_profit_margin {
        columns.push(("operating_profit_margin", Column::Float(v)));
    }
    if let Some(v) = &patch.main_business {
        columns.push(("main_business", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.strengths {
        columns.push(("strengths", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.weaknesses {
        columns.push(("weaknesses", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.target_customers {
        columns.push(("target_customers", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.ideal_candidate {
        columns.push(("ideal_candidate", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.recruiting_positions {
        columns.push(("recruiting_positions", Column::Text(v.clone())));
    }
    if let Some(v) = patch.hiring_count {
        columns.push(("hiring_count", Column::Int(v)));
    }
    if let Some(v) = patch.starting_salary {
        columns.push(("starting_salary", Column::BigInt(v)));
    }
    if let Some(v) = &patch.bonus {
        columns.push(("bonus", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.work_location {
        columns.push(("work_location", Column::Text(v.clone())));
    }
    if let Some(v) = &patch.working_hours {
        columns.push(("working_hours", Column::Text(v.clone())));
    }
    if let Some(v) = patch.annual_holidays {
        columns.push(("annual_holidays", Column::Int(v)));
    }
    if let Some(v) = &patch.benefits {
        columns.push(("benefits", Column::Text(v.clone())));
    }
    if let Some(v) = patch.turnover_rate {
        columns.push(("turnover_rate", Column::Float(v)));
    }
    if let Some(v) = patch.average_age {
        columns.push(("average_age", Column::Float(v)));
    }
    if let Some(v) = patch.average_annual_salary {
        columns.push(("average_annual_salary", Column::BigInt(v)));
    }
    if let Some(v) = &patch.notes {
        columns.push(("notes", Column::Text(v.clone())));
    }
    columns
}

#[async_trait::async_trait]
impl ICompanyRepo for PostgresCompanyRepo {
    async fn insert(&self, profile: &CompanyProfile) -> Result<Company, RepoError> {
        let columns = columns(&CompanyPatch::from(profile.clone()));

        let mut query = QueryBuilder::<Postgres>::new("INSERT INTO companies (");
        {
            let mut names = query.separated(", ");
            for (name, _) in &columns {
                names.push(*name);
            }
        }
        query.push(") VALUES (");
        for (i, (_, value)) in columns.into_iter().enumerate() {
            if i > 0 {
                query.push(", ");
            }
            value.push_bind(&mut query);
        }
        query.push(") RETURNING *");

        let mut tx = self.pool.begin().await.map_err(RepoError::unavailable)?;
        let company: CompanyRaw = query
            .build_query_as()
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "Unable to insert company: {:?}. DB returned error: {:?}",
                    profile.company_name, e
                );
                e
            })?;
        tx.commit().await?;

        Ok(company.into())
    }

    async fn find_all(&self) -> Result<Vec<Company>, RepoError> {
        let mut conn = self.pool.acquire().await.map_err(RepoError::unavailable)?;
        let companies: Vec<CompanyRaw> = sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies
            ORDER BY lower(company_name), company_name, id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("Find all companies failed. DB returned error: {:?}", e);
            e
        })?;

        Ok(companies.into_iter().map(|c| c.into()).collect())
    }

    async fn find(&self, company_id: &ID) -> Result<Option<Company>, RepoError> {
        let mut conn = self.pool.acquire().await.map_err(RepoError::unavailable)?;
        let company: Option<CompanyRaw> = sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies
            WHERE id = $1
            "#,
        )
        .bind(company_id.inner())
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "Find company with id: {} failed. DB returned error: {:?}",
                company_id, e
            );
            e
        })?;

        Ok(company.map(|c| c.into()))
    }

    async fn find_many(&self, company_ids: &[ID]) -> Result<Vec<Company>, RepoError> {
        let ids = company_ids.iter().map(|id| id.inner()).collect::<Vec<_>>();
        let mut conn = self.pool.acquire().await.map_err(RepoError::unavailable)?;
        let companies: Vec<CompanyRaw> = sqlx::query_as::<_, CompanyRaw>(
            r#"
            SELECT * FROM companies
            WHERE id = ANY($1)
            ORDER BY id
            "#,
        )
        .bind(&ids)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "Find companies with ids: {:?} failed. DB returned error: {:?}",
                ids, e
            );
            e
        })?;

        Ok(companies.into_iter().map(|c| c.into()).collect())
    }

    async fn update(&self, company_id: &ID, patch: &CompanyPatch) -> Result<u64, RepoError> {
        let columns = columns(patch);
        if columns.is_empty() {
            warn!("Skipping update of company: {} without fields", company_id);
            return Ok(0);
        }

        let mut query = QueryBuilder::<Postgres>::new("UPDATE companies SET ");
        for (i, (name, value)) in columns.into_iter().enumerate() {
            if i > 0 {
                query.push(", ");
            }
            query.push(name).push(" = ");
            value.push_bind(&mut query);
        }
        query.push(" WHERE id = ").push_bind(company_id.inner());

        let mut tx = self.pool.begin().await.map_err(RepoError::unavailable)?;
        let updated = query
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(
                    "Unable to update company: {}. DB returned error: {:?}",
                    company_id, e
                );
                e
            })?
            .rows_affected();
        tx.commit().await?;

        Ok(updated)
    }

    async fn delete(&self, company_id: &ID) -> Result<Option<Company>, RepoError> {
        let mut tx = self.pool.begin().await.map_err(RepoError::unavailable)?;
        let company: Option<CompanyRaw> = sqlx::query_as::<_, CompanyRaw>(
            r#"
            DELETE FROM companies
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(company_id.inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            error!(
                "Unable to delete company: {}. DB returned error: {:?}",
                company_id, e
            );
            e
        })?;
        tx.commit().await?;

        Ok(company.map(|c| c.into()))
    }
}
