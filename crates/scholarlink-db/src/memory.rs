//! In-process implementation of the repositories for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use scholarlink_models::{
    Application, Discussion, DiscussionWithCreator, NewApplication, NewResearch, NewUser, Research,
    ResearchStatus, ResearchWithProfessor, User, UserContact, UserRole, new_id,
};

use crate::error::StoreError;
use crate::repositories::{
    ApplicationRepository, DiscussionRepository, HealthCheck, ResearchRepository, UserRepository,
};

#[derive(Default)]
struct Collections {
    users: Vec<User>,
    research: Vec<Research>,
    applications: Vec<Application>,
    discussions: Vec<Discussion>,
}

/// Store holding every collection behind one lock.
///
/// While [`MemoryStore::set_failing`] is on, every repository call returns
/// [`StoreError::Unavailable`], for exercising error paths.
#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Collections>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn lock(&self) -> Result<MutexGuard<'_, Collections>, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store unavailable".to_string()));
        }
        Ok(self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner()))
    }

    fn snapshot(&self) -> MutexGuard<'_, Collections> {
        self.data.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Insert a user with an explicit role.
    pub fn seed_user(&self, uid: &str, name: &str, email: &str, role: UserRole) -> User {
        let user = User {
            id: new_id(),
            uid: uid.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            role,
            university: None,
            research_interests: Vec::new(),
            citation_count: 0,
            created_at: Utc::now(),
        };
        self.snapshot().users.push(user.clone());
        user
    }

    pub fn seed_discussion(&self, title: &str, content: &str, created_by: &str) -> Discussion {
        let discussion = Discussion {
            id: new_id(),
            title: title.to_string(),
            content: content.to_string(),
            created_by: created_by.to_string(),
            created_at: Utc::now(),
        };
        self.snapshot().discussions.push(discussion.clone());
        discussion
    }

    pub fn users(&self) -> Vec<User> {
        self.snapshot().users.clone()
    }

    pub fn research(&self) -> Vec<Research> {
        self.snapshot().research.clone()
    }

    pub fn applications(&self) -> Vec<Application> {
        self.snapshot().applications.clone()
    }
}

fn contact_for(users: &[User], id: &str) -> Option<UserContact> {
    users.iter().find(|u| u.id == id).map(|u| UserContact {
        id: u.id.clone(),
        name: u.name.clone(),
        email: u.email.clone(),
    })
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_uid(&self, uid: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock()?.users.iter().find(|u| u.uid == uid).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock()?.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_or_create(&self, new: NewUser) -> Result<User, StoreError> {
        let mut data = self.lock()?;
        if let Some(existing) = data.users.iter().find(|u| u.uid == new.uid) {
            return Ok(existing.clone());
        }

        if let Some(existing) = data.users.iter_mut().find(|u| u.email == new.email) {
            existing.uid = new.uid;
            return Ok(existing.clone());
        }

        let user = User {
            id: new_id(),
            uid: new.uid,
            name: new.name,
            email: new.email,
            role: UserRole::default(),
            university: None,
            research_interests: Vec::new(),
            citation_count: 0,
            created_at: Utc::now(),
        };
        data.users.push(user.clone());
        Ok(user)
    }

    async fn list_by_role(&self, role: Option<UserRole>) -> Result<Vec<User>, StoreError> {
        Ok(self
            .lock()?
            .users
            .iter()
            .filter(|u| role.is_none_or(|r| u.role == r))
            .cloned()
            .collect())
    }

    async fn set_role(&self, email: &str, role: UserRole) -> Result<Option<User>, StoreError> {
        let mut data = self.lock()?;
        Ok(data.users.iter_mut().find(|u| u.email == email).map(|u| {
            u.role = role;
            u.clone()
        }))
    }
}

#[async_trait]
impl ResearchRepository for MemoryStore {
    async fn create(&self, new: NewResearch) -> Result<Research, StoreError> {
        let research = Research {
            id: new_id(),
            title: new.title,
            description: new.description,
            professor_id: new.professor_id,
            university: new.university,
            eligibility: new.eligibility,
            status: ResearchStatus::default(),
            applicants: Vec::new(),
            created_at: Utc::now(),
        };
        self.lock()?.research.push(research.clone());
        Ok(research)
    }

    async fn list_with_professor(&self) -> Result<Vec<ResearchWithProfessor>, StoreError> {
        let data = self.lock()?;
        Ok(data
            .research
            .iter()
            .map(|r| ResearchWithProfessor {
                professor: contact_for(&data.users, &r.professor_id),
                research: r.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl ApplicationRepository for MemoryStore {
    async fn create(&self, new: NewApplication) -> Result<Application, StoreError> {
        let mut data = self.lock()?;
        let application = Application {
            id: new_id(),
            student_id: new.student_id,
            research_id: new.research_id,
            application_text: new.application_text,
            created_at: Utc::now(),
        };

        if let Some(research) = data
            .research
            .iter_mut()
            .find(|r| r.id == application.research_id)
        {
            if !research.applicants.contains(&application.student_id) {
                research.applicants.push(application.student_id.clone());
            }
        }
        data.applications.push(application.clone());

        Ok(application)
    }
}

#[async_trait]
impl DiscussionRepository for MemoryStore {
    async fn list_with_creator(&self) -> Result<Vec<DiscussionWithCreator>, StoreError> {
        let data = self.lock()?;
        Ok(data
            .discussions
            .iter()
            .map(|d| DiscussionWithCreator {
                creator: contact_for(&data.users, &d.created_by),
                discussion: d.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl HealthCheck for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}
