//! Google Sheets v4 REST client.
//!
//! Only the handful of calls needed to replace a worksheet's contents:
//! list sheets, add a sheet, clear, write values and bold the header row.

use crate::config;
use crate::output::{table_range, TableSink};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::error::Error;

/// Identity of one worksheet (tab) inside a spreadsheet.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    #[serde(default)]
    pub sheet_id: i64,
    pub title: String,
}

#[derive(Deserialize, Debug)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Deserialize, Debug)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Deserialize, Debug)]
struct BatchUpdateResponse {
    #[serde(default)]
    replies: Vec<Reply>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Reply {
    add_sheet: Option<AddSheetReply>,
}

#[derive(Deserialize, Debug)]
struct AddSheetReply {
    properties: SheetProperties,
}

/// Client bound to one spreadsheet and one access token.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
    token: String,
}

impl SheetsClient {
    pub fn new(
        base_url: &str,
        spreadsheet_id: &str,
        token: &str,
    ) -> Result<SheetsClient, Box<dyn Error>> {
        let base_url =
            Url::parse(base_url).map_err(|e| format!("Invalid Sheets API url {base_url}: {e}"))?;
        if base_url.cannot_be_a_base() {
            return Err(format!("Sheets API url cannot be a base: {base_url}").into());
        }
        Ok(SheetsClient {
            http: reqwest::Client::new(),
            base_url,
            spreadsheet_id: spreadsheet_id.to_string(),
            token: token.to_string(),
        })
    }

    /// `<base>/<spreadsheet_id>/<segments...>`, each segment percent-encoded.
    fn url(&self, segments: &[&str]) -> Result<Url, Box<dyn Error>> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| format!("Sheets API url cannot be a base: {}", self.base_url))?
            .pop_if_empty()
            .push(&self.spreadsheet_id)
            .extend(segments);
        Ok(url)
    }

    async fn call<T: DeserializeOwned>(
        &self,
        op: &str,
        method: Method,
        url: Url,
        body: Option<Value>,
    ) -> Result<T, Box<dyn Error>> {
        log::debug!("Sheets {op}: {method} {url}");
        let mut request = self.http.request(method, url).bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| format!("Sheets API {op} request failed: {e}"))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("Sheets API {op} response unreadable: {e}"))?;

        if !status.is_success() {
            log::error!("Sheets API {op} returned {status}:\n{text}");
            return Err(format!("Sheets API {op} failed: {status} {text}").into());
        }
        decode(op, &text)
    }

    /// List the worksheets of the spreadsheet.
    pub async fn worksheets(&self) -> Result<Vec<SheetProperties>, Box<dyn Error>> {
        let mut url = self.url(&[])?;
        url.query_pairs_mut().append_pair("fields", "sheets.properties");
        let spreadsheet: Spreadsheet = self.call("get", Method::GET, url, None).await?;
        Ok(spreadsheet.sheets.into_iter().map(|s| s.properties).collect())
    }

    pub async fn find_worksheet(
        &self,
        title: &str,
    ) -> Result<Option<SheetProperties>, Box<dyn Error>> {
        Ok(self.worksheets().await?.into_iter().find(|s| s.title == title))
    }

    pub async fn add_worksheet(
        &self,
        title: &str,
        rows: u32,
        cols: u32,
    ) -> Result<SheetProperties, Box<dyn Error>> {
        log::info!("Creating worksheet '{title}' ({rows}x{cols})");
        let url = self.batch_update_url()?;
        let response: BatchUpdateResponse = self
            .call("addSheet", Method::POST, url, Some(add_sheet_request(title, rows, cols)))
            .await?;
        response
            .replies
            .into_iter()
            .find_map(|r| r.add_sheet)
            .map(|a| a.properties)
            .ok_or_else(|| format!("addSheet reply missing for '{title}'").into())
    }

    /// Remove all values from the worksheet, keeping its formatting.
    pub async fn clear(&self, title: &str) -> Result<(), Box<dyn Error>> {
        let url = self.url(&["values", &format!("{}:clear", quote_sheet_title(title))])?;
        let _: Value = self.call("clear", Method::POST, url, Some(json!({}))).await?;
        Ok(())
    }

    /// Write `values` (rows of cells) into an A1 `range`.
    pub async fn update_values(
        &self,
        range: &str,
        values: &[Vec<String>],
    ) -> Result<(), Box<dyn Error>> {
        let mut url = self.url(&["values", range])?;
        url.query_pairs_mut().append_pair("valueInputOption", "RAW");
        let body = json!({
            "range": range,
            "majorDimension": "ROWS",
            "values": values,
        });
        let _: Value = self.call("update", Method::PUT, url, Some(body)).await?;
        log::info!("Wrote {} row(s) to {range}", values.len());
        Ok(())
    }

    /// Make the first `cols` cells of row 1 bold.
    pub async fn bold_header(&self, sheet_id: i64, cols: usize) -> Result<(), Box<dyn Error>> {
        let url = self.batch_update_url()?;
        let _: Value = self
            .call("format", Method::POST, url, Some(bold_header_request(sheet_id, cols)))
            .await?;
        Ok(())
    }

    fn batch_update_url(&self) -> Result<Url, Box<dyn Error>> {
        // The id and the `:batchUpdate` verb share one path segment
        let mut url = self.url(&[])?;
        let last = format!("{}:batchUpdate", self.spreadsheet_id);
        url.path_segments_mut()
            .map_err(|_| "Sheets API url cannot be a base")?
            .pop()
            .push(&last);
        Ok(url)
    }
}

/// Replace the whole worksheet: create it if needed, clear it, write the
/// table from `A1` and bold the header row.
impl TableSink for SheetsClient {
    async fn publish(&self, worksheet: &str, table: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
        let sheet = match self.find_worksheet(worksheet).await? {
            Some(sheet) => sheet,
            None => {
                self.add_worksheet(worksheet, config::WORKSHEET_ROWS, config::WORKSHEET_COLS)
                    .await?
            }
        };

        self.clear(worksheet).await?;

        let cols = table.first().map(Vec::len).unwrap_or(0);
        if cols == 0 {
            log::warn!("Nothing to write to worksheet '{worksheet}'");
            return Ok(());
        }
        let range = format!(
            "{}!{}",
            quote_sheet_title(worksheet),
            table_range(table.len(), cols)
        );
        self.update_values(&range, table).await?;
        self.bold_header(sheet.sheet_id, cols).await?;
        Ok(())
    }
}

/// Decode a JSON body, reporting the failing path on schema mismatch.
fn decode<T: DeserializeOwned>(op: &str, body: &str) -> Result<T, Box<dyn Error>> {
    // Some calls answer with an empty body
    let body = if body.trim().is_empty() { "{}" } else { body };
    let mut deserializer = serde_json::Deserializer::from_str(body);
    let parsed = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("RESPONSE START:\n\n{}\n\nRESPONSE END\n", body);
        format!(
            "Error parsing Sheets API {op} response: path={} error={}",
            e.path(),
            e
        )
    })?;
    Ok(parsed)
}

/// Quote a worksheet title for A1 notation: `My 'Tab'` -> `'My ''Tab'''`.
pub fn quote_sheet_title(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}

fn add_sheet_request(title: &str, rows: u32, cols: u32) -> Value {
    json!({
        "requests": [{
            "addSheet": {
                "properties": {
                    "title": title,
                    "gridProperties": { "rowCount": rows, "columnCount": cols },
                }
            }
        }]
    })
}

fn bold_header_request(sheet_id: i64, cols: usize) -> Value {
    json!({
        "requests": [{
            "repeatCell": {
                "range": {
                    "sheetId": sheet_id,
                    "startRowIndex": 0,
                    "endRowIndex": 1,
                    "startColumnIndex": 0,
                    "endColumnIndex": cols,
                },
                "cell": { "userEnteredFormat": { "textFormat": { "bold": true } } },
                "fields": "userEnteredFormat.textFormat.bold",
            }
        }]
    })
}
