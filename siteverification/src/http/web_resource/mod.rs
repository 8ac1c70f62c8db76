pub mod delete;
pub mod get;
pub mod get_token;
pub mod insert;
pub mod list;
pub mod patch;
pub mod update;

use google_cloud_gax::http::ServerResponse;
use google_cloud_gax::impl_response_meta;

/// A verified site or domain together with its verified owners.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct WebResource {
    /// The string used to identify this site. This value should be used in the `id` portion of the REST URL
    /// for the Get, Update, and Delete operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The email addresses of all verified owners.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,
    /// The address and type of a site that is verified or will be verified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(WebResource);

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Site {
    /// The site identifier. If the type is set to SITE, the identifier is a URL. If the type is set to
    /// INET_DOMAIN, the site identifier is a domain name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<SiteType>,
}

#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SiteType {
    /// A web site, identified by its URL.
    #[default]
    Site,
    /// A domain name.
    InetDomain,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

/// How the token obtained with `get_token` is placed on the site.
#[derive(Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationMethod {
    /// A file placed at the root of the web site.
    #[default]
    File,
    /// A meta tag in the home page.
    Meta,
    /// A DNS TXT record. Same as `DnsTxt`.
    Dns,
    DnsTxt,
    DnsCname,
    /// The site's Google Analytics tracking code.
    Analytics,
    /// The site's Google Tag Manager container.
    TagManager,
    /// A value not known to this version of the client.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GetTokenRequest {
    /// The site for which a verification token will be generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<Site>,
    /// The verification method that will be used to verify this site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_method: Option<VerificationMethod>,
}

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct GetTokenResponse {
    /// The verification method to use in conjunction with this token. For FILE, the token should be placed
    /// in the top-level directory of the site, stored inside a file of the same name. For META, the token
    /// should be placed in the HEAD tag of the default page that is loaded for the site. For DNS, the token
    /// should be placed in a TXT record of the domain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<VerificationMethod>,
    /// The verification token. The token must be placed appropriately in order for verification to succeed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(GetTokenResponse);

#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Debug, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListWebResourcesResponse {
    /// The list of sites that are owned by the authenticated user.
    pub items: Vec<WebResource>,
    #[serde(skip)]
    pub server_response: ServerResponse,
}

impl_response_meta!(ListWebResourcesResponse);
