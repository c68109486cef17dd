/*!
* Provides a builder experience for assembling `Uri` instances from parts.
* The [`UriBuilder`] type provides a simple API to create new `Uri`
* instances in a fluent style, validating the assembled whole.
*
* # Example
*
* ```rust
* use uritk_core::{error::Result as UriResult, Scheme, Uri, UriBuilder};
*
* fn make_example_uri() -> UriResult<Uri> {
*     let mut builder = UriBuilder::default();
*     builder
*         .scheme(&Scheme::https())
*         .user_name("john.doe")
*         .host_str("www.example.com")?
*         .port(123.into())
*         .path_str("/forum/questions/")?
*         .query_str("tag=networking&order=newest")?
*         .fragment_str("top")?;
*     builder.try_into()
* }
*
* assert_eq!(
*     make_example_uri().unwrap().to_string(),
*     "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
* );
* ```
*/

#![allow(clippy::module_name_repetitions)]

use crate::error::{Component, Error as UriError, ErrorKind, Result as UriResult};
use crate::{Authority, Fragment, Host, Path, Port, Query, Scheme, Uri, UserInfo};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The builder type, providing simple API access to assemble new `Uri`
/// instances in a fluent style.
///
#[derive(Debug, Default)]
pub struct UriBuilder {
    scheme: Option<Scheme>,
    host: Option<Host>,
    user_name: Option<String>,
    password: Option<String>,
    port: Option<Port>,
    path: Option<Path>,
    query: Option<Query>,
    fragment: Option<Fragment>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl TryFrom<UriBuilder> for Uri {
    type Error = UriError;

    fn try_from(builder: UriBuilder) -> Result<Self, Self::Error> {
        Uri::try_from(&builder)
    }
}

impl TryFrom<&UriBuilder> for Uri {
    type Error = UriError;

    fn try_from(builder: &UriBuilder) -> Result<Self, Self::Error> {
        let authority = match &builder.host {
            Some(host) => {
                let mut authority = Authority::new(host.clone());
                if let Some(port) = builder.port {
                    authority = authority.with_port(Some(port));
                }
                if let Some(user_name) = &builder.user_name {
                    let user_info = match &builder.password {
                        None => UserInfo::new(user_name)?,
                        Some(password) => UserInfo::new_with_password(user_name, password)?,
                    };
                    authority = authority.with_user_info(Some(user_info));
                }
                Some(authority)
            }
            None => {
                // User information and port cannot exist without a host.
                if builder.user_name.is_some() || builder.port.is_some() {
                    return Err(ErrorKind::InvalidChar(Component::Authority).into());
                }
                None
            }
        };
        let uri = Uri::new(builder.path.clone().unwrap_or_default());
        let uri = uri.with_scheme(builder.scheme.clone())?;
        let uri = uri.with_authority(authority)?;
        let uri = uri.with_query(builder.query.clone())?;
        uri.with_fragment(builder.fragment.clone())
    }
}

impl UriBuilder {
    /// Use the provided scheme for this URI.
    pub fn scheme(&mut self, scheme: &Scheme) -> &mut Self {
        self.scheme = Some(scheme.clone());
        self
    }

    /// Use the provided scheme, parsed from a string, for this URI.
    pub fn scheme_str(&mut self, scheme: &str) -> UriResult<&mut Self> {
        Ok(self.scheme(&Scheme::from_str(scheme)?))
    }

    /// Use the provided host for this URI's authority.
    pub fn host(&mut self, host: &Host) -> &mut Self {
        self.host = Some(host.clone());
        self
    }

    /// Use the provided host, parsed from a string, for this URI's authority.
    pub fn host_str(&mut self, host: &str) -> UriResult<&mut Self> {
        Ok(self.host(&Host::from_str(host)?))
    }

    /// Use the provided port number for this URI's authority.
    pub fn port(&mut self, port: Port) -> &mut Self {
        self.port = Some(port);
        self
    }

    /// Use the provided user name and password for this URI's authority.
    pub fn user(&mut self, user_name: &str, password: &str) -> &mut Self {
        self.user_name = Some(user_name.to_string());
        self.password = Some(password.to_string());
        self
    }

    /// Use the provided user name for this URI's authority.
    pub fn user_name(&mut self, user_name: &str) -> &mut Self {
        self.user_name = Some(user_name.to_string());
        self
    }

    /// Use the provided password for this URI's authority.
    pub fn password(&mut self, password: &str) -> &mut Self {
        self.password = Some(password.to_string());
        self
    }

    /// Use the root path for this URI.
    pub fn path_root(&mut self) -> &mut Self {
        self.path = Some(Path::root());
        self
    }

    /// Use the provided path for this URI.
    pub fn path(&mut self, path: &Path) -> &mut Self {
        self.path = Some(path.clone());
        self
    }

    /// Use the provided path, parsed from a string, for this URI.
    pub fn path_str(&mut self, path: &str) -> UriResult<&mut Self> {
        self.path = Some(Path::from_str(path)?);
        Ok(self)
    }

    /// Append a segment to the path for this URI.
    pub fn append_path_segment(&mut self, segment: &str) -> UriResult<&mut Self> {
        match &mut self.path {
            None => self.path = Some(Path::from_str(segment)?),
            Some(path) => path.push(segment)?,
        }
        Ok(self)
    }

    /// Use the provided query for this URI.
    pub fn query(&mut self, query: &Query) -> &mut Self {
        self.query = Some(query.clone());
        self
    }

    /// Use the provided query, parsed from a string, for this URI.
    pub fn query_str(&mut self, query: &str) -> UriResult<&mut Self> {
        self.query = Some(Query::from_str(query)?);
        Ok(self)
    }

    /// Use the provided fragment for this URI.
    pub fn fragment(&mut self, fragment: &Fragment) -> &mut Self {
        self.fragment = Some(fragment.clone());
        self
    }

    /// Use the provided fragment, parsed from a string, for this URI.
    pub fn fragment_str(&mut self, fragment: &str) -> UriResult<&mut Self> {
        self.fragment = Some(Fragment::from_str(fragment)?);
        Ok(self)
    }
}
