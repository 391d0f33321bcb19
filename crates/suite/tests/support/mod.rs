//! In-memory application double for scenario tests
//!
//! [`FakeDriver`] models just enough of the screens (login, user list,
//! leave creation, leave types, approvals) that the page objects and
//! fixtures run unmodified against it. State transitions are synchronous,
//! so stable reads converge on the second snapshot.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jorani_harness::driver::url_glob;
use jorani_harness::{Driver, HarnessError, Result, WaitState};
use jorani_suite::{Session, SuiteConfig};

const BASE: &str = "http://localhost";
const EMPTY_MESSAGE: &str = "No matching records found";

#[derive(Debug, Clone)]
struct FakeUser {
    id: usize,
    name: String,
    login: String,
    email: String,
}

impl FakeUser {
    fn row_text(&self) -> String {
        format!("{} {} {} {}", self.id, self.name, self.login, self.email)
    }

    fn cell(&self, col: usize) -> String {
        match col {
            1 => self.id.to_string(),
            2 => self.name.clone(),
            3 => self.login.clone(),
            4 => self.email.clone(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct FakeExtra {
    id: usize,
    cause: String,
    status: String,
}

impl FakeExtra {
    fn row_text(&self) -> String {
        format!("{} {} {}", self.id, self.cause, self.status)
    }

    fn cell(&self, col: usize) -> String {
        match col {
            1 => self.id.to_string(),
            4 => self.cause.clone(),
            5 => self.status.clone(),
            _ => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
struct TableView {
    filter: String,
    page: usize,
    page_len: usize,
}

impl TableView {
    fn new() -> Self {
        Self {
            filter: String::new(),
            page: 0,
            page_len: 10,
        }
    }
}

#[derive(Debug)]
struct AppState {
    url: String,
    users: Vec<FakeUser>,
    leaves: Vec<String>,
    leave_types: Vec<String>,
    extras: Vec<FakeExtra>,
    users_view: TableView,
    leaves_view: TableView,
    extras_view: TableView,
    form: std::collections::HashMap<String, String>,
    checks: std::collections::HashMap<String, bool>,
    flash: Option<String>,
    bootbox: Option<String>,
    add_type_modal: bool,
    reject_modal: bool,
    pending_user_delete: Option<String>,
    pending_leave_delete: Option<String>,
    pending_type_delete: Option<usize>,
    pending_extra_delete: Option<usize>,
    next_user_id: usize,
    next_extra_id: usize,
}

impl AppState {
    fn seeded() -> Self {
        let mut users = vec![FakeUser {
            id: 1,
            name: "Bertrand Balet".to_string(),
            login: "bbalet".to_string(),
            email: "bbalet@example.com".to_string(),
        }];
        for i in 2..=23 {
            users.push(FakeUser {
                id: i,
                name: format!("Seeded Employee {}", i),
                login: format!("employee{}", i),
                email: format!("employee{}@example.com", i),
            });
        }
        Self {
            url: "about:blank".to_string(),
            users,
            leaves: Vec::new(),
            leave_types: vec![
                "Paid leave".to_string(),
                "Sick leave".to_string(),
                "special leave".to_string(),
            ],
            extras: Vec::new(),
            users_view: TableView::new(),
            leaves_view: TableView::new(),
            extras_view: TableView::new(),
            form: Default::default(),
            checks: Default::default(),
            flash: None,
            bootbox: None,
            add_type_modal: false,
            reject_modal: false,
            pending_user_delete: None,
            pending_leave_delete: None,
            pending_type_delete: None,
            pending_extra_delete: None,
            next_user_id: 24,
            next_extra_id: 1,
        }
    }

    fn path(&self) -> &str {
        self.url.strip_prefix(BASE).unwrap_or(&self.url)
    }

    fn go(&mut self, path: &str) {
        self.url = format!("{}{}", BASE, path);
        self.flash = None;
        self.form.clear();
        if path == "/users" {
            self.users_view = TableView::new();
        }
        if path == "/leaves" {
            self.leaves_view = TableView::new();
        }
        if path == "/extra" {
            self.extras_view = TableView::new();
        }
    }

    fn filtered_users(&self) -> Vec<&FakeUser> {
        self.users
            .iter()
            .filter(|u| {
                self.users_view.filter.is_empty() || u.row_text().contains(&self.users_view.filter)
            })
            .collect()
    }

    fn visible_users(&self) -> Vec<&FakeUser> {
        let filtered = self.filtered_users();
        let start = self.users_view.page * self.users_view.page_len;
        filtered
            .into_iter()
            .skip(start)
            .take(self.users_view.page_len)
            .collect()
    }

    fn user_pages(&self) -> usize {
        let total = self.filtered_users().len();
        if total == 0 {
            1
        } else {
            (total + self.users_view.page_len - 1) / self.users_view.page_len
        }
    }

    fn filtered_leaves(&self) -> Vec<&String> {
        self.leaves
            .iter()
            .filter(|l| self.leaves_view.filter.is_empty() || l.contains(&self.leaves_view.filter))
            .collect()
    }

    fn users_info(&self) -> String {
        let total = self.filtered_users().len();
        if total == 0 {
            return "Showing 0 to 0 of 0 entries".to_string();
        }
        let start = self.users_view.page * self.users_view.page_len + 1;
        let end = (start + self.users_view.page_len - 1).min(total);
        format!("Showing {} to {} of {} entries", start, end, total)
    }

    fn users_rows(&self) -> Vec<String> {
        let visible = self.visible_users();
        if visible.is_empty() {
            vec![EMPTY_MESSAGE.to_string()]
        } else {
            visible.iter().map(|u| u.row_text()).collect()
        }
    }

    fn leaves_rows(&self) -> Vec<String> {
        let visible = self.filtered_leaves();
        if visible.is_empty() {
            vec![EMPTY_MESSAGE.to_string()]
        } else {
            visible.iter().map(|l| l.to_string()).collect()
        }
    }

    fn type_rows(&self) -> Vec<String> {
        self.leave_types.clone()
    }

    fn filtered_extras(&self) -> Vec<&FakeExtra> {
        self.extras
            .iter()
            .filter(|e| {
                self.extras_view.filter.is_empty()
                    || e.row_text().contains(&self.extras_view.filter)
            })
            .collect()
    }

    /// Newest first, like the application sorts the list.
    fn extras_sorted(&self) -> Vec<&FakeExtra> {
        let mut visible: Vec<&FakeExtra> = self.filtered_extras();
        visible.sort_by(|a, b| b.id.cmp(&a.id));
        visible
    }

    fn extras_rows(&self) -> Vec<String> {
        let visible = self.extras_sorted();
        if visible.is_empty() {
            vec![EMPTY_MESSAGE.to_string()]
        } else {
            visible.iter().map(|e| e.row_text()).collect()
        }
    }

    fn click(&mut self, selector: &str) -> Result<()> {
        match selector {
            "#send" if self.path() == "/session/login" => {
                let login = self.form.get("#login").cloned().unwrap_or_default();
                let password = self.form.get("#password").cloned().unwrap_or_default();
                if login == "bbalet" && password == "bbalet" {
                    self.go("/home");
                } else {
                    self.flash = Some("Invalid login or password".to_string());
                }
            }
            "#send" if self.path() == "/users/create" => {
                let user = FakeUser {
                    id: self.next_user_id,
                    name: format!(
                        "{} {}",
                        self.form.get("#firstname").cloned().unwrap_or_default(),
                        self.form.get("#lastname").cloned().unwrap_or_default()
                    ),
                    login: self.form.get("#login").cloned().unwrap_or_default(),
                    email: self.form.get("#email").cloned().unwrap_or_default(),
                };
                self.next_user_id += 1;
                self.users.push(user);
                self.go("/users");
                self.flash = Some("The user has been successfully created".to_string());
            }
            "a:has-text(\"Create user\")" => self.go("/users/create"),
            "a:has-text(\"List of users\")" => self.go("/users"),
            "a:has-text(\"List of types\")" => self.go("/leavetypes"),
            "a:has-text(\"Request a Leave\")" => self.go("/leaves/create"),
            "a:has-text(\"List of leave requests\")" => self.go("/leaves"),
            "a:has-text(\"Request an Overtime\")" => self.go("/extras/create"),
            "a[href$=\"/requests\"]" => self.go("/requests"),
            "a[href$=\"/overtime\"]" => self.go("/overtime"),
            "a[href$=\"/extra\"]" => self.go("/extra"),
            "#users_next" => {
                if self.users_view.page + 1 < self.user_pages() {
                    self.users_view.page += 1;
                }
            }
            "#action-delete" => {
                if let Some(login) = self.pending_user_delete.take() {
                    self.users.retain(|u| u.login != login);
                    self.flash = Some("The user has been successfully deleted".to_string());
                }
            }
            // The application reuses this confirm button id for leave and
            // overtime deletion modals.
            "#lnkDeleteUser" => {
                if let Some(cause) = self.pending_leave_delete.take() {
                    if let Some(pos) = self.leaves.iter().position(|l| *l == cause) {
                        self.leaves.remove(pos);
                    }
                    self.flash =
                        Some("The leave request has been successfully deleted".to_string());
                } else if let Some(id) = self.pending_extra_delete.take() {
                    self.extras.retain(|e| e.id != id);
                    self.flash =
                        Some("The overtime request has been successfully deleted".to_string());
                }
            }
            "a[data-target='#frmAddLeaveType']" => self.add_type_modal = true,
            "#frmAddLeaveType button[data-dismiss='modal']" => self.add_type_modal = false,
            "#cmdCreateLeaveType" => {
                let name = self.form.get("#name").cloned().unwrap_or_default();
                if self.leave_types.iter().any(|t| *t == name) {
                    self.bootbox = Some("This leave type already exists.".to_string());
                } else {
                    self.leave_types.push(name);
                    self.add_type_modal = false;
                    self.flash =
                        Some("The leave type has been successfully created".to_string());
                }
            }
            "#lnkDeleteLeaveType" => {
                if let Some(idx) = self.pending_type_delete.take() {
                    if idx < self.leave_types.len() {
                        self.leave_types.remove(idx);
                    }
                }
            }
            ".bootbox.modal.fade.in .btn-primary" => self.bootbox = None,
            "#cmdCreateExtra" => {
                let extra = FakeExtra {
                    id: self.next_extra_id,
                    cause: self.form.get("#cause").cloned().unwrap_or_default(),
                    status: self
                        .form
                        .get("select[name=\"status\"]")
                        .cloned()
                        .unwrap_or_else(|| "Requested".to_string()),
                };
                self.next_extra_id += 1;
                self.extras.push(extra);
                self.go("/extra");
                self.flash =
                    Some("The overtime request has been successfully created".to_string());
            }
            "a[title='accept']" => {
                self.flash =
                    Some("The overtime request has been successfully accepted".to_string());
            }
            ".lnkAccept" => {
                self.flash = Some("The leave request has been successfully accepted".to_string());
            }
            ".lnkReject" => self.reject_modal = true,
            "#frmRejectComment .btn-primary" => {
                self.reject_modal = false;
                self.flash = Some("The leave request has been successfully rejected".to_string());
            }
            "#cmdSelfManager" => {}
            _ if selector.starts_with("a.dropdown-toggle") => {}
            _ => {
                if let Some(id) = delete_link_id(selector) {
                    if self.extras.iter().any(|e| e.id == id) {
                        self.pending_extra_delete = Some(id);
                    } else {
                        return Err(HarnessError::Driver(format!(
                            "no overtime request with id {}",
                            id
                        )));
                    }
                } else if let Some(row) = row_index(selector, "#users tbody tr", "a.confirm-delete")
                {
                    let login = self
                        .visible_users()
                        .get(row - 1)
                        .map(|u| u.login.clone())
                        .ok_or_else(|| HarnessError::Driver(format!("no row {}", row)))?;
                    self.pending_user_delete = Some(login);
                } else if let Some(row) = row_index(selector, "#leaves tbody tr", "a.confirm-delete")
                {
                    let cause = self
                        .filtered_leaves()
                        .get(row - 1)
                        .map(|l| l.to_string())
                        .ok_or_else(|| HarnessError::Driver(format!("no row {}", row)))?;
                    self.pending_leave_delete = Some(cause);
                } else if let Some(row) = row_index(
                    selector,
                    "#leave-types tbody tr",
                    "a[data-target='#frmDeleteLeaveType']",
                ) {
                    self.pending_type_delete = Some(row - 1);
                } else {
                    return Err(HarnessError::Driver(format!(
                        "unhandled click target: {}",
                        selector
                    )));
                }
            }
        }
        Ok(())
    }

    fn dblclick(&mut self, selector: &str) -> Result<()> {
        if selector.starts_with("button[name=\"status\"]") && self.path() == "/leaves/create" {
            if !self.form.contains_key("#viz_startdate") {
                self.bootbox = Some("The field Duration is mandatory.".to_string());
                return Ok(());
            }
            let cause = self
                .form
                .get("textarea[name=\"cause\"]")
                .cloned()
                .unwrap_or_default();
            self.leaves.push(cause);
            self.go("/leaves");
            self.flash = Some("The leave request has been successfully created".to_string());
            Ok(())
        } else {
            self.click(selector)
        }
    }

    fn text_of(&self, selector: &str) -> Result<String> {
        if selector == "#flashbox" || selector.starts_with("#flashbox,") {
            return Ok(self.flash.clone().unwrap_or_default());
        }
        if selector == ".bootbox.modal.fade.in .modal-body" {
            return Ok(self.bootbox.clone().unwrap_or_default());
        }
        if selector == "#users" {
            return Ok(self.users_rows().join("\n"));
        }
        if selector == "#users_info" {
            return Ok(self.users_info());
        }
        if selector == "#users tbody td.dataTables_empty" {
            return Ok(if self.visible_users().is_empty() {
                EMPTY_MESSAGE.to_string()
            } else {
                String::new()
            });
        }
        if selector == "#leaves" {
            return Ok(self.leaves_rows().join("\n"));
        }
        if selector == "#leaves tbody td.dataTables_empty" {
            return Ok(if self.filtered_leaves().is_empty() {
                EMPTY_MESSAGE.to_string()
            } else {
                String::new()
            });
        }
        if selector == "#extras" {
            return Ok(self.extras_rows().join("\n"));
        }
        if selector == "#extras_info" {
            let total = self.filtered_extras().len();
            return Ok(if total == 0 {
                "Showing 0 to 0 of 0 entries".to_string()
            } else {
                format!("Showing 1 to {} of {} entries", total, total)
            });
        }
        if selector == "#extras tbody td.dataTables_empty" {
            return Ok(if self.filtered_extras().is_empty() {
                EMPTY_MESSAGE.to_string()
            } else {
                String::new()
            });
        }
        if let Some((row, rest)) = split_row(selector, "#extras tbody tr") {
            let rows = self.extras_rows();
            let text = rows
                .get(row - 1)
                .cloned()
                .ok_or_else(|| HarnessError::Driver(format!("no row {}", row)))?;
            return match parse_cell(rest) {
                Some(col) => {
                    let extra = self.extras_sorted().get(row - 1).map(|e| e.cell(col));
                    Ok(extra.unwrap_or_default())
                }
                None => Ok(text),
            };
        }
        if let Some((row, rest)) = split_row(selector, "#users tbody tr") {
            let rows = self.users_rows();
            let text = rows
                .get(row - 1)
                .cloned()
                .ok_or_else(|| HarnessError::Driver(format!("no row {}", row)))?;
            return match parse_cell(rest) {
                Some(col) => {
                    let user = self.visible_users().get(row - 1).map(|u| u.cell(col));
                    Ok(user.unwrap_or_default())
                }
                None => Ok(text),
            };
        }
        if let Some((row, rest)) = split_row(selector, "#leaves tbody tr") {
            let rows = self.leaves_rows();
            let text = rows
                .get(row - 1)
                .cloned()
                .ok_or_else(|| HarnessError::Driver(format!("no row {}", row)))?;
            let _ = rest;
            return Ok(text);
        }
        if let Some((row, _)) = split_row(selector, "#leave-types tbody tr") {
            return self
                .type_rows()
                .get(row - 1)
                .cloned()
                .ok_or_else(|| HarnessError::Driver(format!("no row {}", row)));
        }
        Err(HarnessError::Driver(format!(
            "unhandled text target: {}",
            selector
        )))
    }

    fn count_of(&self, selector: &str) -> usize {
        match selector {
            "#users tbody tr" => self.users_rows().len(),
            "#leaves tbody tr" => self.leaves_rows().len(),
            "#leave-types tbody tr" => self.leave_types.len(),
            "#extras tbody tr" => self.extras_rows().len(),
            "#users_next" => usize::from(self.path() == "/users"),
            "#leaves_next" => usize::from(self.path() == "/leaves"),
            // The overtime list fits on one page here.
            "#extras_next" => 0,
            "#users_processing, .alert-error" => 0,
            _ => usize::from(self.visible(selector)),
        }
    }

    fn visible(&self, selector: &str) -> bool {
        if selector == "#flashbox" || selector.starts_with("#flashbox,") {
            return self.flash.is_some();
        }
        match selector {
            ".bootbox.modal.fade.in"
            | ".bootbox.modal.fade.in .modal-body"
            | ".bootbox.modal.fade.in .btn-primary" => self.bootbox.is_some(),
            "#frmAddLeaveType" => self.add_type_modal,
            "#frmConfirmDelete" => self.pending_user_delete.is_some(),
            "#frmDeleteLeaveRequest" => self.pending_leave_delete.is_some(),
            "#frmDeleteLeaveType" => self.pending_type_delete.is_some(),
            "#frmDeleteExtraRequest" => self.pending_extra_delete.is_some(),
            "#frmRejectComment" => self.reject_modal,
            "#lblCreditAlert" | "#lbl0verlappingAlert" => false,
            "#users_processing, .alert-error" => false,
            "#users_next" => self.path() == "/users",
            "#extras_next" => false,
            _ => true,
        }
    }
}

/// Parse `"{prefix}:nth-child(N) {suffix}"` into N when the suffix matches.
fn row_index(selector: &str, prefix: &str, suffix: &str) -> Option<usize> {
    let (row, rest) = split_row(selector, prefix)?;
    (rest == suffix).then_some(row)
}

/// Parse `"{prefix}:nth-child(N)"` plus an optional trailing part.
fn split_row<'a>(selector: &'a str, prefix: &str) -> Option<(usize, &'a str)> {
    let rest = selector.strip_prefix(prefix)?.strip_prefix(":nth-child(")?;
    let close = rest.find(')')?;
    let row: usize = rest[..close].parse().ok()?;
    Some((row, rest[close + 1..].trim_start()))
}

fn parse_cell(rest: &str) -> Option<usize> {
    let rest = rest.strip_prefix("td:nth-child(")?;
    let close = rest.find(')')?;
    rest[..close].parse().ok()
}

/// Parse `a.confirm-delete[data-id="N"]` into N.
fn delete_link_id(selector: &str) -> Option<usize> {
    let rest = selector.strip_prefix("a.confirm-delete[data-id=\"")?;
    let close = rest.find('"')?;
    rest[..close].parse().ok()
}

/// Driver over the in-memory model. All mutation happens under one lock;
/// no method holds the lock across an await.
pub struct FakeDriver {
    state: Mutex<AppState>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(AppState::seeded()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, AppState> {
        self.state.lock().unwrap()
    }

    fn satisfied(&self, selector: &str, state: WaitState) -> bool {
        let app = self.lock();
        match state {
            WaitState::Visible => app.visible(selector),
            WaitState::Hidden => !app.visible(selector),
            WaitState::Attached => app.count_of(selector) > 0,
            WaitState::Detached => app.count_of(selector) == 0,
        }
    }
}

#[async_trait]
impl Driver for FakeDriver {
    async fn navigate(&self, url: &str) -> Result<()> {
        let mut app = self.lock();
        let path = url.strip_prefix(BASE).unwrap_or(url).to_string();
        app.go(&path);
        Ok(())
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.lock().url.clone())
    }

    async fn reload(&self) -> Result<()> {
        Ok(())
    }

    async fn click(&self, selector: &str) -> Result<()> {
        self.lock().click(selector)
    }

    async fn dblclick(&self, selector: &str) -> Result<()> {
        self.lock().dblclick(selector)
    }

    async fn fill(&self, selector: &str, value: &str) -> Result<()> {
        let mut app = self.lock();
        match selector {
            "#users_filter input" => {
                app.users_view.filter = value.to_string();
                app.users_view.page = 0;
            }
            "#leaves_filter input" => {
                app.leaves_view.filter = value.to_string();
                app.leaves_view.page = 0;
            }
            "#extras_filter input[type='search']" => {
                app.extras_view.filter = value.to_string();
                app.extras_view.page = 0;
            }
            _ => {
                app.form.insert(selector.to_string(), value.to_string());
            }
        }
        Ok(())
    }

    async fn select_option(&self, selector: &str, label: &str) -> Result<()> {
        let mut app = self.lock();
        if selector == "#users_length select" {
            let len: usize = label
                .parse()
                .map_err(|_| HarnessError::Driver(format!("bad page length: {}", label)))?;
            app.users_view.page_len = len;
            app.users_view.page = 0;
        } else {
            app.form.insert(selector.to_string(), label.to_string());
        }
        Ok(())
    }

    async fn press(&self, _key: &str) -> Result<()> {
        Ok(())
    }

    async fn inner_text(&self, selector: &str) -> Result<String> {
        self.lock().text_of(selector)
    }

    async fn inner_html(&self, selector: &str) -> Result<String> {
        let app = self.lock();
        match selector {
            "#users" => Ok(format!(
                "<page:{}>{}",
                app.users_view.page,
                app.users_rows().join("|")
            )),
            "#leaves" => Ok(format!(
                "<page:{}>{}",
                app.leaves_view.page,
                app.leaves_rows().join("|")
            )),
            _ => app.text_of(selector),
        }
    }

    async fn input_value(&self, selector: &str) -> Result<String> {
        let app = self.lock();
        if selector == "#duration" && app.path() == "/leaves/create" {
            return Ok("5".to_string());
        }
        Ok(app.form.get(selector).cloned().unwrap_or_default())
    }

    async fn is_visible(&self, selector: &str) -> Result<bool> {
        Ok(self.lock().visible(selector))
    }

    async fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.lock().count_of(selector))
    }

    async fn attribute(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let app = self.lock();
        if selector == "#users_next" && name == "class" {
            let last = app.users_view.page + 1 >= app.user_pages();
            return Ok(Some(if last {
                "paginate_button next disabled".to_string()
            } else {
                "paginate_button next".to_string()
            }));
        }
        Ok(None)
    }

    async fn is_checked(&self, selector: &str) -> Result<bool> {
        Ok(self.lock().checks.get(selector).copied().unwrap_or(false))
    }

    async fn set_checked(&self, selector: &str, checked: bool) -> Result<()> {
        self.lock().checks.insert(selector.to_string(), checked);
        Ok(())
    }

    async fn wait_for_selector(
        &self,
        selector: &str,
        state: WaitState,
        timeout: Duration,
    ) -> Result<()> {
        let deadline = Instant::now() + timeout;
        loop {
            if self.satisfied(selector, state) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarnessError::Driver(format!(
                    "timeout waiting for {} to be {}",
                    selector,
                    state.as_str()
                )));
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    async fn wait_for_url(&self, pattern: &str, timeout: Duration) -> Result<()> {
        let re = url_glob(pattern)?;
        let deadline = Instant::now() + timeout;
        loop {
            if re.is_match(&self.lock().url) {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(HarnessError::Driver(format!(
                    "timeout waiting for url {}",
                    pattern
                )));
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    async fn screenshot(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    async fn wait_for_download(
        &self,
        selector: &str,
        dir: &Path,
        _timeout: Duration,
    ) -> Result<std::path::PathBuf> {
        let name = if selector.contains("/users/export") {
            "users.csv"
        } else if selector.contains("/extra/export") {
            "overtime.csv"
        } else {
            return Err(HarnessError::Driver(format!(
                "unhandled download target: {}",
                selector
            )));
        };
        Ok(dir.join(name))
    }
}

/// An unauthenticated session over a fresh fake application.
pub fn fake_session() -> Session {
    jorani_suite::init_tracing();
    let config = SuiteConfig {
        base_url: BASE.to_string(),
        stability_interval: Duration::from_millis(10),
        ..Default::default()
    };
    Session::new(Arc::new(FakeDriver::new()), config)
}
