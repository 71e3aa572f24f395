/*! Forms/Drive API access.

[FormsApi] is the contract the form builder relies on.
[GoogleForms] implements it over the Google Forms v1 and Drive v3 REST APIs.

Calls are blocking and made one at a time. There is no retry: a failed call aborts the run.
Authentication is out of scope, [GoogleForms] takes an already obtained OAuth access token.
!*/
use std::{fs::File, io::BufReader, path::Path};

use log::debug;
use serde::Deserialize;
use serde_json::json;

use crate::error::Error;

use super::FormItem;

const FORMS_URL: &str = "https://forms.googleapis.com/v1/forms";
const DRIVE_URL: &str = "https://www.googleapis.com/drive/v3/files";

/// Remote survey operations.
pub trait FormsApi {
    /// Create an empty form, returning its id.
    fn create_form(&self, title: &str) -> Result<String, Error>;
    fn set_description(&self, form_id: &str, description: &str) -> Result<(), Error>;
    /// Append `items`, in order.
    fn add_items(&self, form_id: &str, items: &[FormItem]) -> Result<(), Error>;
    /// Move a Drive file (a form) into `folder_id`, removing it from its previous folders.
    fn move_to_folder(&self, file_id: &str, folder_id: &str) -> Result<(), Error>;
}

/// Public URL of a form.
pub fn participant_url(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/{}/viewform", form_id)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedForm {
    form_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    #[serde(default)]
    parents: Vec<String>,
}

/// Stored credentials, as written by the OAuth client libraries.
#[derive(Debug, Deserialize)]
struct StoredToken {
    token: String,
}

/// Google Forms/Drive client.
pub struct GoogleForms {
    client: reqwest::blocking::Client,
    token: String,
}

impl GoogleForms {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            token,
        }
    }

    /// Read the access token from a `token.json` credentials file.
    pub fn from_token_file(path: &Path) -> Result<Self, Error> {
        let f = File::open(path)?;
        let stored: StoredToken = serde_json::from_reader(BufReader::new(f))?;
        Ok(Self::new(stored.token))
    }

    fn batch_update(&self, form_id: &str, requests: Vec<serde_json::Value>) -> Result<(), Error> {
        debug!("{}: batchUpdate with {} requests", form_id, requests.len());
        self.client
            .post(format!("{}/{}:batchUpdate", FORMS_URL, form_id))
            .bearer_auth(&self.token)
            .json(&json!({ "requests": requests }))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}

/// Requests appending `items` at the start of a form.
pub fn create_item_requests(items: &[FormItem]) -> Vec<serde_json::Value> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            json!({
                "createItem": {
                    "item": item,
                    "location": {"index": idx}
                }
            })
        })
        .collect()
}

impl FormsApi for GoogleForms {
    fn create_form(&self, title: &str) -> Result<String, Error> {
        let created: CreatedForm = self
            .client
            .post(FORMS_URL)
            .bearer_auth(&self.token)
            .json(&json!({ "info": { "title": title } }))
            .send()?
            .error_for_status()?
            .json()?;

        created
            .form_id
            .ok_or_else(|| Error::Api(format!("no formId returned for {:?}", title)))
    }

    fn set_description(&self, form_id: &str, description: &str) -> Result<(), Error> {
        let request = json!({
            "updateFormInfo": {
                "info": {"description": description},
                "updateMask": "description"
            }
        });
        self.batch_update(form_id, vec![request])
    }

    fn add_items(&self, form_id: &str, items: &[FormItem]) -> Result<(), Error> {
        self.batch_update(form_id, create_item_requests(items))
    }

    fn move_to_folder(&self, file_id: &str, folder_id: &str) -> Result<(), Error> {
        let url = format!("{}/{}", DRIVE_URL, file_id);
        let file: DriveFile = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&[("fields", "parents")])
            .send()?
            .error_for_status()?
            .json()?;

        let previous = file.parents.join(",");
        debug!("moving {} from [{}] to {}", file_id, previous, folder_id);

        self.client
            .patch(&url)
            .bearer_auth(&self.token)
            .query(&[
                ("addParents", folder_id),
                ("removeParents", previous.as_str()),
                ("fields", "id, parents"),
            ])
            .json(&json!({}))
            .send()?
            .error_for_status()?;
        Ok(())
    }
}
