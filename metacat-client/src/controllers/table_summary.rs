//! Table summary panel controller.

use super::ControllerContext;
use crate::api::{ApiClientError, ListTestCaseParams};
use crate::generation::{GenerationToken, RequestGeneration};
use crate::view_model::table_summary::{merge_profile, tally_tests, TableSummaryView, TableTests};
use metacat_core::{Paging, Table, TableProfile, TableQuery, TestCase};

/// Latest profile and queries fetched for a table.
pub type ProfileFetch = (Option<TableProfile>, Option<Vec<TableQuery>>);

#[derive(Debug)]
pub struct TableSummaryController {
    ctx: ControllerContext,
    entity: Option<Table>,
    table: Option<Table>,
    tests: TableTests,
    generation: RequestGeneration,
}

impl TableSummaryController {
    pub fn new(ctx: ControllerContext) -> Self {
        Self {
            ctx,
            entity: None,
            table: None,
            tests: TableTests::default(),
            generation: RequestGeneration::new(),
        }
    }

    pub fn table(&self) -> Option<&Table> {
        self.table.as_ref()
    }

    pub fn tests(&self) -> &TableTests {
        &self.tests
    }

    /// View model for the current table, rebuilt on every call.
    pub fn summary(&self) -> Option<TableSummaryView> {
        let table = self.table.as_ref()?;
        Some(TableSummaryView::assemble(
            table,
            &self.tests,
            self.ctx.localizer.as_ref(),
        ))
    }

    /// Reset to `entity`, then fetch its tests followed by profile and
    /// queries.
    pub async fn load(&mut self, entity: Table) {
        let token = self.begin(entity);
        let tests = self.fetch_tests().await;
        self.apply_tests(token, tests);
        let profile = self.fetch_profile().await;
        self.apply_profile(token, profile);
    }

    pub fn begin(&mut self, entity: Table) -> GenerationToken {
        self.table = Some(entity.clone());
        self.entity = Some(entity);
        self.tests = TableTests::default();
        self.generation.begin()
    }

    pub async fn fetch_tests(&self) -> Result<Paging<TestCase>, ApiClientError> {
        let params = ListTestCaseParams::for_table(self.entity_fqn());
        self.ctx.client.list_test_cases(&params).await
    }

    pub fn apply_tests(
        &mut self,
        token: GenerationToken,
        result: Result<Paging<TestCase>, ApiClientError>,
    ) -> bool {
        if !self.generation.is_current(token) {
            tracing::debug!(table = %self.entity_fqn(), generation = token.value(), "dropping stale test cases");
            return false;
        }
        match result {
            Ok(page) => {
                let fqn = self.entity_fqn().to_string();
                self.tests = tally_tests(&fqn, page.data);
                tracing::debug!(
                    table = %fqn,
                    retained = self.tests.tests.len(),
                    "tallied test cases"
                );
            }
            Err(err) => {
                tracing::warn!(table = %self.entity_fqn(), error = %err, "failed to list test cases");
                self.ctx.show_error_toast(&err);
            }
        }
        true
    }

    /// Latest profile by FQN, then queries by id.
    pub async fn fetch_profile(&self) -> Result<ProfileFetch, ApiClientError> {
        let Some(entity) = self.entity.as_ref() else {
            return Ok((None, None));
        };
        let profiled = self
            .ctx
            .client
            .get_latest_table_profile_by_fqn(entity.fqn())
            .await?;
        let queried = self.ctx.client.get_table_queries_by_table_id(entity.id).await?;
        Ok((profiled.profile, queried.table_queries))
    }

    pub fn apply_profile(
        &mut self,
        token: GenerationToken,
        result: Result<ProfileFetch, ApiClientError>,
    ) -> bool {
        if !self.generation.is_current(token) {
            tracing::debug!(table = %self.entity_fqn(), generation = token.value(), "dropping stale profile");
            return false;
        }
        match result {
            Ok((profile, queries)) => {
                if let Some(current) = self.table.as_ref() {
                    self.table = Some(merge_profile(current, profile, queries));
                }
            }
            Err(err) => {
                tracing::warn!(table = %self.entity_fqn(), error = %err, "failed to fetch profile");
                let i18n = &self.ctx.localizer;
                let entity_type = i18n.t("label.table-lowercase");
                let entity_name = self
                    .entity
                    .as_ref()
                    .map(|entity| entity.name.clone())
                    .unwrap_or_default();
                let message = i18n.translate(
                    "server.entity-details-fetch-error",
                    &[
                        ("entityType", entity_type.as_str()),
                        ("entityName", entity_name.as_str()),
                    ],
                );
                self.ctx.show_error_message(message);
            }
        }
        true
    }

    fn entity_fqn(&self) -> &str {
        self.entity.as_ref().map(Table::fqn).unwrap_or_default()
    }
}
