use crate::client::{Client, Error, GraphqlError, Response, Result};
use graphql_client::GraphQLQuery;
use reqwest::Method;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphqlError>>,
}

/// `GraphqlClient` handles communication with GitLab's GraphQL API.
///
/// The endpoint is derived from the REST base url, so
/// `https://gitlab.example.com/api/v4/` queries
/// `https://gitlab.example.com/api/graphql`.
///
/// GitLab API docs: https://docs.gitlab.com/ee/api/graphql/
pub struct GraphqlClient<'a> {
    inner: &'a Client,
}

impl<'a> GraphqlClient<'a> {
    pub(super) fn new(client: &'a Client) -> Self {
        Self { inner: client }
    }

    fn endpoint(&self) -> Result<Url> {
        let base = Url::parse(self.inner.base_url())
            .map_err(|e| format!("invalid base url `{}`: {}", self.inner.base_url(), e))?;
        base.join("../graphql")
            .map_err(|e| format!("unable to derive the GraphQL endpoint: {}", e).into())
    }

    /// Perform a Query against GitLab's GraphQL Endpoint
    pub async fn query<Q: Serialize, R: DeserializeOwned>(&self, query: &Q) -> Result<Response<R>> {
        let url = self.endpoint()?;
        let response = self
            .inner
            .request_absolute(Method::POST, url.as_str())
            .json(query)
            .send()
            .await?;
        let Response {
            status,
            headers,
            pagination,
            rate,
            data: response,
        } = self.inner.json::<GraphqlResponse<R>>(response).await?;

        match (response.data, response.errors) {
            (Some(data), None) => Ok(Response {
                status,
                headers,
                pagination,
                rate,
                data,
            }),
            (_, Some(errors)) => Err(Error::GraphqlError(errors)),
            (None, None) => Err("GraphQL response carried neither data nor errors".into()),
        }
    }

    /// Perform a query generated with `graphql_client`'s derive
    pub async fn query_with<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Response<Q::ResponseData>> {
        let body = Q::build_query(variables);
        self.query(&body).await
    }
}
