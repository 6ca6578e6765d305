use crate::{
    config::ApiConfig,
    data::student::{NewStudent, StudentCreated, StudentPatch, StudentRecord, StudentUpdate},
    error::{
        CorkboardResult, DecodeResponseSnafu, EmptyResponseSnafu, GraphQlSnafu,
        MissingStudentSnafu, ReadResponseSnafu, SendRequestSnafu,
    },
};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::{Value, json};
use snafu::{OptionExt, ResultExt, ensure};
use std::sync::Arc;

const GET_STUDENT: &str = "\
query getStudent($id: Int!) {
    getStudent(id: $id) {
        id
        first_name
        last_name
        email
        class_code
        grad_date
        time_zone
        slack
    }
}";

const UPDATE_STUDENT: &str = "\
mutation updateStudent($id: Int!, $studentData: StudentInput!) {
    updateStudent(id: $id, studentData: $studentData) {
        id
        first_name
        last_name
        email
        class_code
        grad_date
        time_zone
        slack
    }
}";

const ADD_STUDENT: &str = "\
mutation addStudent($studentData: StudentInput!) {
    addStudent(studentData: $studentData) {
        id
        first_name
        last_name
    }
}";

/// The data-access capability the views are handed. Implementations own the
/// transport; the views never reach for an ambient client.
#[async_trait]
pub trait StudentApi: Send + Sync {
    async fn fetch_student(&self, id: i32) -> CorkboardResult<StudentRecord>;
    async fn update_student(
        &self,
        id: i32,
        student_data: StudentPatch,
    ) -> CorkboardResult<StudentUpdate>;
    async fn add_student(&self, student_data: NewStudent) -> CorkboardResult<StudentCreated>;
}

#[derive(Clone, Debug)]
pub struct GraphQlClient {
    http: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl GraphQlClient {
    #[must_use]
    pub fn new(config: Arc<ApiConfig>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &'static str,
        variables: Value,
    ) -> CorkboardResult<T> {
        let mut request = self
            .http
            .post(self.config.endpoint())
            .json(&json!({ "query": query, "variables": variables }));
        if let Some(token) = self.config.bearer_token() {
            request = request.bearer_auth(token.expose_secret());
        }

        let body = request
            .send()
            .await
            .context(SendRequestSnafu)?
            .bytes()
            .await
            .context(ReadResponseSnafu)?;
        let envelope: GraphQlResponse<T> =
            serde_json::from_slice(&body).context(DecodeResponseSnafu)?;

        if let Some(errors) = envelope.errors {
            ensure!(
                errors.is_empty(),
                GraphQlSnafu {
                    messages: errors.into_iter().map(|e| e.message).collect::<Vec<_>>(),
                }
            );
        }
        envelope.data.context(EmptyResponseSnafu { operation })
    }
}

#[async_trait]
impl StudentApi for GraphQlClient {
    async fn fetch_student(&self, id: i32) -> CorkboardResult<StudentRecord> {
        let data: GetStudentData = self
            .execute("getStudent", GET_STUDENT, json!({ "id": id }))
            .await?;
        data.get_student.context(MissingStudentSnafu { id })
    }

    async fn update_student(
        &self,
        id: i32,
        student_data: StudentPatch,
    ) -> CorkboardResult<StudentUpdate> {
        let data: UpdateStudentData = self
            .execute(
                "updateStudent",
                UPDATE_STUDENT,
                json!({ "id": id, "studentData": student_data }),
            )
            .await?;
        Ok(data.update_student)
    }

    async fn add_student(&self, student_data: NewStudent) -> CorkboardResult<StudentCreated> {
        let data: AddStudentData = self
            .execute(
                "addStudent",
                ADD_STUDENT,
                json!({ "studentData": student_data }),
            )
            .await?;
        Ok(data.add_student)
    }
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

#[derive(Deserialize)]
struct GetStudentData {
    #[serde(rename = "getStudent")]
    get_student: Option<StudentRecord>,
}

#[derive(Deserialize)]
struct UpdateStudentData {
    #[serde(rename = "updateStudent")]
    update_student: StudentUpdate,
}

#[derive(Deserialize)]
struct AddStudentData {
    #[serde(rename = "addStudent")]
    add_student: StudentCreated,
}
