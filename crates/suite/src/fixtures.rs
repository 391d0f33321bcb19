//! Fixture definitions for the suite
//!
//! Each fixture creates an entity through the UI, yields the key a test
//! needs to find it again, and captures a teardown that removes (or
//! settles) the entity after the test body, whatever the body's outcome.

use jorani_harness::{FixtureRegistry, Result, SetupOutcome};
use tracing::warn;

use crate::data::{unique_suffix, LeaveRequestForm, OvertimeForm, UserRecord};
use crate::pages::{
    CreateUserPage, HomePage, LeaveRequestPage, LeaveTypesPage, LeavesPage, OvertimePage,
    OvertimeRequestPage, RequestsPage, UsersPage,
};
use crate::session::Session;

/// Fixture names, so tests request them by constant instead of string
/// literals scattered around.
pub mod names {
    pub const LEAVE_REQUEST: &str = "leave_request";
    pub const PLANNED_LEAVE: &str = "planned_leave";
    pub const TEMP_USER: &str = "temp_user";
    pub const LEAVE_TYPE: &str = "leave_type";
    pub const CLEANUP_LAST_USER: &str = "cleanup_last_user";
    pub const OVERTIME_REQUEST: &str = "overtime_request";
}

/// Build the registry with every fixture the suite uses. The context is
/// the authenticated [`Session`] of the current test execution.
pub fn registry() -> FixtureRegistry<Session> {
    let mut registry = FixtureRegistry::new();

    // A leave request in "Requested" state. Teardown settles it by
    // accepting it from the approval screen so it stops cluttering the
    // pending list.
    registry.define(names::LEAVE_REQUEST, &[], |session: Session, _deps| async move {
        let form = LeaveRequestForm::unique();
        let cause = form.cause.clone().unwrap_or_default();
        create_leave(&session, &form, false).await?;

        let teardown_session = session.clone();
        Ok(SetupOutcome::yielding(cause).on_teardown(move || async move {
            HomePage::new(teardown_session.driver()).go_to_requests().await?;
            RequestsPage::new(teardown_session.driver()).accept_first().await?;
            Ok(())
        }))
    });

    // A leave request in "Planned" state. Teardown finds it by its unique
    // cause on the requester's own list and deletes it.
    registry.define(names::PLANNED_LEAVE, &[], |session: Session, _deps| async move {
        let form = LeaveRequestForm::unique();
        let cause = form.cause.clone().unwrap_or_default();
        create_leave(&session, &form, true).await?;

        let teardown_session = session.clone();
        let teardown_cause = cause.clone();
        Ok(SetupOutcome::yielding(cause).on_teardown(move || async move {
            HomePage::new(teardown_session.driver()).go_to_leave_list().await?;
            let leaves = LeavesPage::new(teardown_session.driver());
            leaves.wait_for_table().await?;
            leaves.delete_by_cause(&teardown_cause).await?;
            Ok(())
        }))
    });

    // An account created through the admin UI, yielded by login. The
    // teardown tolerates the account already being gone: tests that
    // delete the user themselves are exercising exactly that path.
    registry.define(names::TEMP_USER, &[], |session: Session, _deps| async move {
        let user = UserRecord::unique();
        let login = user.login.clone();
        HomePage::new(session.driver()).go_to_create_user().await?;
        CreateUserPage::new(session.driver()).create(&user).await?;

        let teardown_session = session.clone();
        let teardown_login = login.clone();
        Ok(SetupOutcome::yielding(login).on_teardown(move || async move {
            HomePage::new(teardown_session.driver()).go_to_user_list().await?;
            let users = UsersPage::new(teardown_session.driver());
            users.wait_for_table().await?;
            if let Err(e) = users.delete_by_login(&teardown_login).await {
                warn!(login = %teardown_login, error = %e, "temp user already removed");
            }
            Ok(())
        }))
    });

    // A leave type with a timestamped name, removed by name afterwards.
    registry.define(names::LEAVE_TYPE, &[], |session: Session, _deps| async move {
        let name = format!("Temporal_Test_{}", unique_suffix());
        HomePage::new(session.driver()).go_to_leave_types().await?;
        LeaveTypesPage::new(session.driver())
            .create(&name, "TT", false)
            .await?;

        let teardown_session = session.clone();
        let teardown_name = name.clone();
        Ok(SetupOutcome::yielding(name).on_teardown(move || async move {
            HomePage::new(teardown_session.driver()).go_to_leave_types().await?;
            LeaveTypesPage::new(teardown_session.driver())
                .delete_by_name(&teardown_name)
                .await?;
            Ok(())
        }))
    });

    // Teardown-only: after the body, remove whatever account sits in the
    // last row of the final page. Best-effort on purpose: the body may
    // have failed before creating anything.
    registry.define(
        names::CLEANUP_LAST_USER,
        &[],
        |session: Session, _deps| async move {
            let teardown_session = session.clone();
            Ok(SetupOutcome::unit().on_teardown(move || async move {
                if let Err(e) = delete_last_listed_user(&teardown_session).await {
                    warn!(error = %e, "last-user cleanup skipped");
                }
                Ok(())
            }))
        },
    );

    // An overtime request, settled by accepting it afterwards.
    registry.define(
        names::OVERTIME_REQUEST,
        &[],
        |session: Session, _deps| async move {
            let form = OvertimeForm::default();
            let cause = form.cause.clone();
            HomePage::new(session.driver()).go_to_create_overtime().await?;
            OvertimeRequestPage::new(session.driver()).create(&form).await?;

            let teardown_session = session.clone();
            Ok(SetupOutcome::yielding(cause).on_teardown(move || async move {
                HomePage::new(teardown_session.driver())
                    .go_to_overtime_list()
                    .await?;
                OvertimePage::new(teardown_session.driver()).accept_first().await?;
                Ok(())
            }))
        },
    );

    registry
}

async fn create_leave(session: &Session, form: &LeaveRequestForm, planned: bool) -> Result<()> {
    HomePage::new(session.driver()).go_to_create_leave().await?;
    let page = LeaveRequestPage::new(session.driver());
    page.fill(form).await?;
    if planned {
        page.submit_planned().await
    } else {
        page.submit_requested().await
    }
}

async fn delete_last_listed_user(session: &Session) -> Result<()> {
    HomePage::new(session.driver()).go_to_user_list().await?;
    let users = UsersPage::new(session.driver());
    users.wait_for_table().await?;
    let login = users.last_listed_login().await?;
    users.delete_by_login(&login).await
}
