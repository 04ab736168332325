//! Folder REST API client.
//!
//! Thin typed wrapper over the backend's `/folders` endpoints. All transport
//! goes through [`HttpClient`], so the same client runs against reqwest in the
//! binary and against [`MockHttpClient`](crate::adapters::mock::MockHttpClient)
//! in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{
    ErrorContext, FolderError, MediaHubError, MediaHubResult, NetworkError, ResultExt,
};
use crate::models::{
    Folder, FolderContents, FolderCreateRequest, FolderPathResponse, FolderUpdateRequest,
    FoldersListResponse, MoveAssetRequest, MoveFolderRequest, StatusResponse,
};
use crate::traits::{FolderLookup, FolderLookupError, Headers, HttpClient, Response};

/// Path segment the backend uses for "no folder".
const ROOT_SEGMENT: &str = "root";

/// Verbs that carry a JSON body.
#[derive(Debug, Clone, Copy)]
enum Method {
    Post,
    Put,
}

/// Client for the MediaHub folder endpoints.
pub struct FolderApiClient<C: HttpClient> {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    http: C,
}

impl FolderApiClient<ReqwestHttpClient> {
    /// Build a reqwest-backed client from configuration.
    pub fn from_config(config: &ClientConfig) -> MediaHubResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout())
            .map_err(|e| NetworkError::from_http_error(e, &config.api_url))?;
        Ok(Self::new(http, &config.api_url))
    }
}

impl<C: HttpClient> FolderApiClient<C> {
    pub fn new(http: C, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// `GET /folders`
    pub async fn list_folders(&self) -> MediaHubResult<Vec<Folder>> {
        let url = format!("{}/folders", self.base_url);
        let response: FoldersListResponse = self
            .get_json(&url)
            .await
            .context(ErrorContext::new("list_folders"))?;
        tracing::debug!(count = response.folders.len(), "Listed folders");
        Ok(response.folders)
    }

    /// `GET /folders?parentId=...`, with `None` listing the top level.
    pub async fn list_by_parent(&self, parent_id: Option<&str>) -> MediaHubResult<Vec<Folder>> {
        let parent = parent_id.unwrap_or(ROOT_SEGMENT);
        let url = format!(
            "{}/folders?parentId={}",
            self.base_url,
            urlencoding::encode(parent)
        );
        let response: FoldersListResponse = self
            .get_json(&url)
            .await
            .with_context(|| ErrorContext::new("list_by_parent").with_folder_id(parent))?;
        Ok(response.folders)
    }

    /// `GET /folders/{id}`
    pub async fn get_folder(&self, id: &str) -> MediaHubResult<Folder> {
        let url = self.folder_url(id, "");
        self.get_json(&url)
            .await
            .map_err(|e| not_found_as_folder(e, id))
            .with_context(|| ErrorContext::new("get_folder").with_folder_id(id))
    }

    /// `GET /folders/{id}/contents`, with `None` meaning the root level.
    pub async fn contents(&self, id: Option<&str>) -> MediaHubResult<FolderContents> {
        let segment = id.unwrap_or(ROOT_SEGMENT);
        let url = self.folder_url(segment, "/contents");
        self.get_json(&url)
            .await
            .map_err(|e| not_found_as_folder(e, segment))
            .with_context(|| ErrorContext::new("contents").with_folder_id(segment))
    }

    /// `GET /folders/{id}/path`: ancestors root first, ending with the folder.
    pub async fn folder_path(&self, id: &str) -> MediaHubResult<Vec<Folder>> {
        let url = self.folder_url(id, "/path");
        let response: FolderPathResponse = self
            .get_json(&url)
            .await
            .map_err(|e| not_found_as_folder(e, id))
            .with_context(|| ErrorContext::new("folder_path").with_folder_id(id))?;
        Ok(response.path)
    }

    /// `POST /folders`
    pub async fn create_folder(&self, request: &FolderCreateRequest) -> MediaHubResult<Folder> {
        if request.name.trim().is_empty() {
            return Err(FolderError::InvalidName {
                name: request.name.clone(),
            }
            .into());
        }
        let url = format!("{}/folders", self.base_url);
        let folder: Folder = self
            .send_json(Method::Post, &url, request)
            .await
            .context(ErrorContext::new("create_folder"))?;
        tracing::info!(folder_id = %folder.id, name = %folder.name, "Created folder");
        Ok(folder)
    }

    /// `PUT /folders/{id}`
    pub async fn update_folder(
        &self,
        id: &str,
        request: &FolderUpdateRequest,
    ) -> MediaHubResult<Folder> {
        if let Some(name) = &request.name {
            if name.trim().is_empty() {
                return Err(FolderError::InvalidName { name: name.clone() }.into());
            }
        }
        if request.parent_id.as_deref() == Some(id) {
            return Err(FolderError::CannotBeOwnParent {
                folder_id: id.to_string(),
            }
            .into());
        }

        let url = self.folder_url(id, "");
        self.send_json(Method::Put, &url, request)
            .await
            .map_err(|e| classify_update_error(e, id, request.parent_id.as_deref()))
            .with_context(|| ErrorContext::new("update_folder").with_folder_id(id))
    }

    /// Reparent a folder. A `None` target moves it to the top level.
    pub async fn move_folder(&self, request: &MoveFolderRequest) -> MediaHubResult<Folder> {
        let target = request.target_folder_id.as_deref();
        let folder = self
            .update_folder(&request.folder_id, &FolderUpdateRequest::reparent(target))
            .await?;
        tracing::info!(
            folder_id = %request.folder_id,
            target_folder = target.unwrap_or(ROOT_SEGMENT),
            "Moved folder"
        );
        Ok(folder)
    }

    /// `PUT /assets/{id}/move`
    pub async fn move_asset(&self, request: &MoveAssetRequest) -> MediaHubResult<StatusResponse> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Body<'a> {
            folder_id: Option<&'a str>,
        }

        let url = format!(
            "{}/assets/{}/move",
            self.base_url,
            urlencoding::encode(&request.asset_id)
        );
        let body = Body {
            folder_id: request.target_folder_id.as_deref(),
        };
        let status: StatusResponse = self
            .send_json(Method::Put, &url, &body)
            .await
            .with_context(|| ErrorContext::new("move_asset").with_component("assets"))?;
        tracing::info!(asset_id = %request.asset_id, "Moved asset");
        Ok(status)
    }

    /// `DELETE /folders/{id}`
    pub async fn delete_folder(&self, id: &str) -> MediaHubResult<StatusResponse> {
        let url = self.folder_url(id, "");
        let response = self
            .http
            .delete(&url, &Headers::new())
            .await
            .map_err(|e| MediaHubError::from(NetworkError::from_http_error(e, &url)))
            .and_then(decode)
            .map_err(|e| not_found_as_folder(e, id))
            .with_context(|| ErrorContext::new("delete_folder").with_folder_id(id))?;
        tracing::info!(folder_id = id, "Deleted folder");
        Ok(response)
    }

    fn folder_url(&self, id: &str, suffix: &str) -> String {
        format!("{}/folders/{}{}", self.base_url, urlencoding::encode(id), suffix)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> MediaHubResult<T> {
        let response = self
            .http
            .get(url, &json_headers())
            .await
            .map_err(|e| NetworkError::from_http_error(e, url))?;
        decode(response)
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: &B,
    ) -> MediaHubResult<T> {
        // Encoding happens before anything is sent, so it is not a bad response.
        let payload = serde_json::to_string(body).map_err(|e| NetworkError::Other {
            message: format!("failed to encode request body: {}", e),
        })?;
        let headers = json_headers();
        let result = match method {
            Method::Post => self.http.post(url, &payload, &headers).await,
            Method::Put => self.http.put(url, &payload, &headers).await,
        };
        let response = result.map_err(|e| NetworkError::from_http_error(e, url))?;
        decode(response)
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

fn decode<T: DeserializeOwned>(response: Response) -> MediaHubResult<T> {
    if !response.is_success() {
        return Err(NetworkError::HttpStatus {
            status: response.status,
            message: response.error_message(),
        }
        .into());
    }
    Ok(response.json()?)
}

fn not_found_as_folder(err: MediaHubError, folder_id: &str) -> MediaHubError {
    match err {
        MediaHubError::Network(NetworkError::HttpStatus { status: 404, .. }) => {
            FolderError::NotFound {
                folder_id: folder_id.to_string(),
            }
            .into()
        }
        other => other,
    }
}

/// The backend reports invalid reparenting as a generic failure with a
/// descriptive message.
fn classify_update_error(err: MediaHubError, id: &str, target: Option<&str>) -> MediaHubError {
    let err = not_found_as_folder(err, id);
    let message = match &err {
        MediaHubError::Network(NetworkError::HttpStatus { message, .. }) => message.to_lowercase(),
        _ => return err,
    };

    if message.contains("cyclic reference") {
        FolderError::CyclicReference {
            folder_id: id.to_string(),
            target_id: target.unwrap_or_default().to_string(),
        }
        .into()
    } else if message.contains("own parent") {
        FolderError::CannotBeOwnParent {
            folder_id: id.to_string(),
        }
        .into()
    } else {
        err
    }
}

#[async_trait]
impl<C: HttpClient> FolderLookup for FolderApiClient<C> {
    async fn list_all_folders(&self) -> Result<Vec<Folder>, FolderLookupError> {
        self.list_folders().await.map_err(FolderLookupError::from)
    }

    async fn get_folder_by_id(&self, id: &str) -> Result<Folder, FolderLookupError> {
        self.get_folder(id).await.map_err(FolderLookupError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::error::ErrorCategory;
    use crate::traits::HttpError;
    use bytes::Bytes;
    use serde_json::json;

    const BASE: &str = "http://api.test/api";

    fn client() -> FolderApiClient<MockHttpClient> {
        FolderApiClient::new(MockHttpClient::new(), "http://api.test/api/")
    }

    fn ok_json(value: serde_json::Value) -> MockResponse {
        MockResponse::Success(Response::json_body(200, &value))
    }

    fn folder_json(id: &str, name: &str, parent: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "parentId": parent,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        })
    }

    fn not_found() -> MockResponse {
        MockResponse::Success(Response::json_body(404, &json!({"error": "Folder not found"})))
    }

    #[test]
    fn test_base_url_trimmed() {
        assert_eq!(client().base_url, BASE);
    }

    #[tokio::test]
    async fn test_list_folders() {
        let api = client();
        api.http().set_response(
            &format!("{}/folders", BASE),
            ok_json(json!({"folders": [
                folder_json("a", "A", None),
                folder_json("b", "B", Some("a")),
            ]})),
        );

        let folders = api.list_folders().await.unwrap();
        assert_eq!(folders.len(), 2);
        assert_eq!(folders[1].parent_id.as_deref(), Some("a"));

        let requests = api.http().get_requests();
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].headers.get("Accept").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_list_folders_null_is_empty() {
        let api = client();
        api.http()
            .set_response(&format!("{}/folders", BASE), ok_json(json!({"folders": null})));
        assert!(api.list_folders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_by_parent_uses_root_sentinel() {
        let api = client();
        api.http().set_default_response(ok_json(json!({"folders": []})));

        api.list_by_parent(None).await.unwrap();
        api.list_by_parent(Some("a b")).await.unwrap();

        let urls: Vec<String> = api.http().get_requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{}/folders?parentId=root", BASE),
                format!("{}/folders?parentId=a%20b", BASE),
            ]
        );
    }

    #[tokio::test]
    async fn test_get_folder_not_found() {
        let api = client();
        api.http()
            .set_response(&format!("{}/folders/missing", BASE), not_found());

        let err = api.get_folder("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(
            err.inner(),
            MediaHubError::Folder(FolderError::NotFound { folder_id }) if folder_id == "missing"
        ));
        assert_eq!(err.context().unwrap().operation, "get_folder");
    }

    #[tokio::test]
    async fn test_get_folder_encodes_id() {
        let api = client();
        api.http().set_response(
            &format!("{}/folders/a%2Fb", BASE),
            ok_json(folder_json("a/b", "Slash", None)),
        );
        let folder = api.get_folder("a/b").await.unwrap();
        assert_eq!(folder.name, "Slash");
    }

    #[tokio::test]
    async fn test_invalid_json_is_client_error() {
        let api = client();
        api.http().set_response(
            &format!("{}/folders/x", BASE),
            MockResponse::Success(Response::new(200, Bytes::from("not json"))),
        );
        let err = api.get_folder("x").await.unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::Client);
    }

    #[tokio::test]
    async fn test_unencodable_body_is_not_a_response_error() {
        struct Unencodable;

        impl Serialize for Unencodable {
            fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
                Err(serde::ser::Error::custom("map key must be a string"))
            }
        }

        let api = client();
        let url = format!("{}/folders/x", BASE);
        let err = api
            .send_json::<_, serde_json::Value>(Method::Put, &url, &Unencodable)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            MediaHubError::Network(NetworkError::Other { ref message })
                if message.contains("failed to encode request body")
        ));
        assert_ne!(err.category(), ErrorCategory::Client);
        assert!(api.http().get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_maps_to_network() {
        let api = client();
        api.http().set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let err = api.list_folders().await.unwrap_err();
        assert!(err.is_retryable());
        assert!(matches!(
            err.inner(),
            MediaHubError::Network(NetworkError::ConnectionFailed { .. })
        ));
    }

    #[tokio::test]
    async fn test_contents_and_path() {
        let api = client();
        api.http().set_response(
            &format!("{}/folders/root/contents", BASE),
            ok_json(json!({"assets": [], "subFolders": [folder_json("a", "A", None)]})),
        );
        api.http().set_response(
            &format!("{}/folders/b/path", BASE),
            ok_json(json!({"path": [folder_json("a", "A", None), folder_json("b", "B", Some("a"))]})),
        );

        let contents = api.contents(None).await.unwrap();
        assert_eq!(contents.sub_folders.len(), 1);

        let path = api.folder_path("b").await.unwrap();
        let names: Vec<&str> = path.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_create_folder_sends_json() {
        let api = client();
        api.http().set_method_response(
            "POST",
            &format!("{}/folders", BASE),
            MockResponse::Success(Response::json_body(201, &folder_json("n", "New", Some("a")))),
        );

        let request = FolderCreateRequest::new("New", Some("a"));
        let folder = api.create_folder(&request).await.unwrap();
        assert_eq!(folder.id, "n");

        let requests = api.http().get_requests();
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "New");
        assert_eq!(body["parentId"], "a");
        assert_eq!(
            requests[0].headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_create_folder_rejects_blank_name() {
        let api = client();
        let err = api
            .create_folder(&FolderCreateRequest::new("   ", None))
            .await
            .unwrap_err();
        assert!(matches!(err, MediaHubError::Folder(FolderError::InvalidName { .. })));
        assert!(api.http().get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_move_folder_to_root_sends_empty_parent() {
        let api = client();
        api.http().set_method_response(
            "PUT",
            &format!("{}/folders/b", BASE),
            ok_json(folder_json("b", "B", None)),
        );

        let moved = api
            .move_folder(&MoveFolderRequest {
                folder_id: "b".to_string(),
                target_folder_id: None,
            })
            .await
            .unwrap();
        assert!(moved.is_root());

        let requests = api.http().get_requests();
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["parentId"], "");
    }

    #[tokio::test]
    async fn test_move_folder_into_itself_rejected_locally() {
        let api = client();
        let err = api
            .move_folder(&MoveFolderRequest {
                folder_id: "a".to_string(),
                target_folder_id: Some("a".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MediaHubError::Folder(FolderError::CannotBeOwnParent { .. })
        ));
        assert!(api.http().get_requests().is_empty());
    }

    #[tokio::test]
    async fn test_move_folder_cycle_reported_by_backend() {
        let api = client();
        api.http().set_method_response(
            "PUT",
            &format!("{}/folders/a", BASE),
            MockResponse::Success(Response::json_body(
                500,
                &json!({"error": "Failed to update folder: cyclic reference detected - folder would be its own ancestor"}),
            )),
        );

        let err = api
            .move_folder(&MoveFolderRequest {
                folder_id: "a".to_string(),
                target_folder_id: Some("a1".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err.inner(),
            MediaHubError::Folder(FolderError::CyclicReference { target_id, .. }) if target_id == "a1"
        ));
    }

    #[tokio::test]
    async fn test_move_asset() {
        let api = client();
        api.http().set_method_response(
            "PUT",
            &format!("{}/assets/x1/move", BASE),
            ok_json(json!({"status": "success", "message": "Asset moved successfully"})),
        );

        let status = api
            .move_asset(&MoveAssetRequest {
                asset_id: "x1".to_string(),
                target_folder_id: Some("a".to_string()),
            })
            .await
            .unwrap();
        assert!(status.is_success());

        let requests = api.http().get_requests();
        let body: serde_json::Value =
            serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body, json!({"folderId": "a"}));
    }

    #[tokio::test]
    async fn test_delete_folder() {
        let api = client();
        api.http().set_method_response(
            "DELETE",
            &format!("{}/folders/a", BASE),
            ok_json(json!({"status": "success", "message": "Folder deleted successfully"})),
        );
        api.http().set_method_response(
            "DELETE",
            &format!("{}/folders/gone", BASE),
            not_found(),
        );

        assert!(api.delete_folder("a").await.unwrap().is_success());
        assert!(api.delete_folder("gone").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_folder_lookup_impl() {
        let api = client();
        api.http()
            .set_response(&format!("{}/folders/missing", BASE), not_found());
        api.http().set_response(
            &format!("{}/folders/a", BASE),
            ok_json(folder_json("a", "A", None)),
        );

        let lookup: &dyn FolderLookup = &api;
        assert_eq!(lookup.get_folder_by_id("a").await.unwrap().name, "A");
        assert_eq!(
            lookup.get_folder_by_id("missing").await.unwrap_err(),
            FolderLookupError::NotFound("missing".to_string())
        );
    }
}
