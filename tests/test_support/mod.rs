#![allow(dead_code)]

use async_trait::async_trait;
use corkboard::{
    api::StudentApi,
    data::student::{NewStudent, StudentCreated, StudentPatch, StudentRecord, StudentUpdate},
    error::{CorkboardResult, MissingStudentSnafu},
    workflow::{Clipboard, LinkOpener},
};
use snafu::ensure;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

pub fn sample_record(id: i32) -> StudentRecord {
    StudentRecord {
        id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".parse().unwrap(),
        class_code: "JS-07".to_string(),
        grad_date: "2020-01-01".to_string(),
        time_zone: "America/Denver".to_string(),
        slack: Some("ada".to_string()),
    }
}

/// `StudentApi` double fed a script of responses, popped in call order.
#[derive(Default)]
pub struct ScriptedApi {
    fetches: Mutex<VecDeque<CorkboardResult<StudentRecord>>>,
    updates: Mutex<VecDeque<CorkboardResult<StudentUpdate>>>,
    pub fetch_calls: Mutex<Vec<i32>>,
    pub update_calls: Mutex<Vec<(i32, StudentPatch)>>,
}

impl ScriptedApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_fetch(&self, response: CorkboardResult<StudentRecord>) {
        self.fetches.lock().unwrap().push_back(response);
    }

    pub fn script_update(&self, response: CorkboardResult<StudentUpdate>) {
        self.updates.lock().unwrap().push_back(response);
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.lock().unwrap().len()
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl StudentApi for ScriptedApi {
    async fn fetch_student(&self, id: i32) -> CorkboardResult<StudentRecord> {
        self.fetch_calls.lock().unwrap().push(id);
        self.fetches
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted fetch response left")
    }

    async fn update_student(
        &self,
        id: i32,
        student_data: StudentPatch,
    ) -> CorkboardResult<StudentUpdate> {
        self.update_calls.lock().unwrap().push((id, student_data));
        self.updates
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted update response left")
    }

    async fn add_student(&self, _student_data: NewStudent) -> CorkboardResult<StudentCreated> {
        panic!("add_student is not scripted in these tests");
    }
}

/// Clipboard double: records every write, optionally failing from a given
/// write index onward.
#[derive(Default)]
pub struct MemoryClipboard {
    pub writes: Vec<String>,
    pub fail_from: Option<usize>,
}

impl MemoryClipboard {
    pub fn failing_from(index: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_from: Some(index),
        }
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&mut self, text: &str) -> CorkboardResult<()> {
        if let Some(fail_from) = self.fail_from {
            ensure!(
                self.writes.len() < fail_from,
                corkboard::error::ClipboardWriteSnafu {
                    detail: "scripted clipboard failure",
                }
            );
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> CorkboardResult<()> {
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// A fetch error double for scripting failures.
pub fn missing_student(id: i32) -> CorkboardResult<StudentRecord> {
    MissingStudentSnafu { id }.fail()
}
