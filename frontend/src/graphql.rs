//! GraphQL transport over gloo-net.

use crate::storage::BrowserStorage;
use crate::utils;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use shared::session::ACCESS_TOKEN_KEY;
use shared::{
    ApiError, GraphQlRequest, GraphQlResponse, LoginForm, OsscListing, Record, SessionStore,
    SessionTokens, SignInPayload,
};

pub const OSSC_LISTING_QUERY: &str = r#"
  query osscs {
    base_ossc {
      name
      region {
        name
      }
      subcity {
        name
      }
      created_at
    }
  }
"#;

pub const SIGN_IN_MUTATION: &str = r#"
  mutation SignIn($password: String!, $phoneNumber: String!) {
    signIn(password: $password, phoneNumber: $phoneNumber) {
      data {
        id
        email
      }
      tokens {
        access_token
        refresh_token
      }
    }
  }
"#;

async fn execute<T: DeserializeOwned>(
    endpoint: &str,
    query: &str,
    variables: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let mut request = Request::post(&utils::api_url(endpoint));
    if let Some(token) = BrowserStorage
        .get(ACCESS_TOKEN_KEY)
        .filter(|t| !t.is_empty())
    {
        request = request.header("Authorization", &utils::bearer(&token));
    }

    let response = request
        .json(&GraphQlRequest { query, variables })
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_status(
            response.status(),
            response.status_text(),
        ));
    }

    response
        .json::<GraphQlResponse<T>>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .into_result()
}

/// Fetch the full OSSC listing.
pub async fn fetch_osscs(endpoint: &str) -> Result<Vec<Record>, ApiError> {
    let listing: OsscListing = execute(endpoint, OSSC_LISTING_QUERY, None).await?;
    Ok(listing.base_ossc)
}

/// Exchange phone and password for session tokens.
pub async fn sign_in(endpoint: &str, form: &LoginForm) -> Result<SessionTokens, ApiError> {
    let payload: SignInPayload =
        execute(endpoint, SIGN_IN_MUTATION, Some(form.credentials())).await?;
    payload
        .sign_in
        .map(|s| s.tokens)
        .ok_or_else(|| ApiError::Auth("sign-in returned no session".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_selects_every_column_path() {
        for field in ["name", "region", "subcity", "created_at"] {
            assert!(OSSC_LISTING_QUERY.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn sign_in_variables_match_mutation() {
        assert!(SIGN_IN_MUTATION.contains("$phoneNumber"));
        assert!(SIGN_IN_MUTATION.contains("$password"));
        let form = LoginForm {
            phone: "0911".to_string(),
            password: "pw".to_string(),
        };
        let vars = form.credentials();
        assert!(vars.get("phoneNumber").is_some());
        assert!(vars.get("password").is_some());
    }
}
