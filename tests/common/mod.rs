#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use booking_room::{Employee, EmployeeRepository, Paging, RepositoryError};

/// In-memory repository that counts how often each operation is reached.
#[derive(Default)]
pub struct FakeEmployeeRepository {
    employees: Mutex<Vec<Employee>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    next_id: AtomicUsize,
    fail_writes: bool,
    broken: bool,
}

impl FakeEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every create/update fails with a duplicate error.
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Every operation fails with a database error.
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn with(employees: Vec<Employee>) -> Self {
        let repo = Self::default();
        *repo.employees.lock().unwrap() = employees;
        repo
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }

    fn record(&self, op: &'static str) -> Result<(), RepositoryError> {
        *self.calls.lock().unwrap().entry(op).or_insert(0) += 1;
        if self.broken {
            return Err(RepositoryError::Database(sqlx::Error::RowNotFound));
        }
        Ok(())
    }

    fn find(&self, pred: impl Fn(&Employee) -> bool) -> Result<Employee, RepositoryError> {
        self.employees
            .lock()
            .unwrap()
            .iter()
            .find(|e| pred(e))
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl EmployeeRepository for FakeEmployeeRepository {
    async fn get_by_id(&self, id: &str) -> Result<Employee, RepositoryError> {
        self.record("get_by_id")?;
        self.find(|e| e.id == id)
    }

    async fn get_by_username(&self, username: &str) -> Result<Employee, RepositoryError> {
        self.record("get_by_username")?;
        self.find(|e| e.username == username)
    }

    async fn get_by_username_for_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Employee, RepositoryError> {
        self.record("get_by_username_for_login")?;
        match self.find(|e| e.username == username) {
            Ok(e) if e.password == password => Ok(e),
            Ok(_) => Err(RepositoryError::InvalidCredentials),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        self.record("create")?;
        if self.fail_writes {
            return Err(RepositoryError::Duplicate(format!(
                "username {}",
                employee.username
            )));
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        employee.id = format!("emp-{n}");
        self.employees.lock().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        self.record("update")?;
        if self.fail_writes {
            return Err(RepositoryError::NotFound);
        }
        let mut employees = self.employees.lock().unwrap();
        let slot = employees
            .iter_mut()
            .find(|e| e.id == employee.id)
            .ok_or(RepositoryError::NotFound)?;
        *slot = employee.clone();
        Ok(employee)
    }

    async fn list(&self, page: u32, size: u32) -> Result<(Vec<Employee>, Paging), RepositoryError> {
        self.record("list")?;
        let employees = self.employees.lock().unwrap();
        let start = (page.saturating_sub(1) as usize) * size as usize;
        let data = employees
            .iter()
            .skip(start)
            .take(size as usize)
            .cloned()
            .collect();
        Ok((data, Paging::new(page, size, employees.len() as u64)))
    }
}

pub fn employee(username: &str) -> Employee {
    Employee {
        name: format!("Employee {username}"),
        username: username.to_string(),
        password: "rahasia".to_string(),
        role: "employee".to_string(),
        division: "Operations".to_string(),
        position: "Staff".to_string(),
        contact: format!("{username}@example.com"),
        ..Default::default()
    }
}

pub fn stored(id: &str, username: &str) -> Employee {
    Employee {
        id: id.to_string(),
        ..employee(username)
    }
}
