/*!
Provides the `Authority` component of a `Uri` comprising host, user
information, and port sub-components. All but the host sub-component are
optional, and an authority cannot be constructed around an empty host.

# Example

```rust
use uritk_core::{Authority, Host, Port};
use std::str::FromStr;

let authority = Authority::new_with_port(
    Host::from_str("www.example.com").unwrap(),
    Port::new(8080),
);

assert!(authority.has_port());
assert!(!authority.has_user_info());
assert_eq!(authority.to_string(), "//www.example.com:8080");
```
*/

#![allow(clippy::module_name_repetitions)]

use crate::error::{Error as UriError, ErrorKind, Result as UriResult, ResultExt};
use crate::pct::{self, Region};
use crate::{parse, Normalize, ValidateStr};
use std::fmt::{Display, Formatter};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// This type represents the port sub-component, a 16 bit unsigned integer.
///
/// # Example
///
/// ```rust
/// use uritk_core::Port;
/// use std::str::FromStr;
///
/// let http_port: Port = Port::from_str("80").unwrap();
/// let https_port: Port = 443.into();
/// ```
///
/// Note that `to_string` formats the value for inclusion in a URI string,
/// while `value` returns the raw port integer.
///
/// ```rust
/// use uritk_core::Port;
///
/// let port = Port::new(80);
/// assert_eq!(port.to_string(), ":80");
/// assert_eq!(port.value(), 80);
/// ```
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(u16);

///
/// This type holds the host in its parsed form. It is an enumeration of the
/// set of valid host representations allowed by the URI specification.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// A validated registered name; e.g. `localhost`, `example.com`. Stored
    /// lowercased, percent-triplets uppercased, non-ASCII labels converted
    /// to their A-label form.
    DomainName(String),
    /// A parsed IPv4 address; e.g. `127.0.0.1`.
    Ipv4(Ipv4Addr),
    /// A parsed IPv6 address; e.g. `[2001:db8::ff00:42:8329]`.
    Ipv6(Ipv6Addr),
    /// A parsed IP future address; e.g. `[v7.2001:db8::ff00:42:8329]`.
    IpvFuture(u16, String),
}

///
/// This type wraps the specific [`HostKind`] and provides a common place for
/// host-related operations.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Host(HostKind);

///
/// The user information sub-component of a URI's [`Authority`], decomposed
/// into a user and an optional password. Both sides are stored in their
/// percent-encoded form.
///
/// # Example
///
/// ```rust
/// use uritk_core::UserInfo;
///
/// let user = UserInfo::new("John.Doe").unwrap();
///
/// assert!(!user.has_password());
/// assert_eq!(user.to_string(), "John.Doe@");
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UserInfo {
    user: String,
    password: Option<String>,
}

///
/// The authority component: a required host with optional user information
/// and port sub-components.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Authority {
    user_info: Option<UserInfo>,
    host: Host,
    port: Option<Port>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Port {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl FromStr for Port {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A leading zero is only permitted on the exact string "0".
        if s.is_empty()
            || !s.bytes().all(|b| b.is_ascii_digit())
            || (s.len() > 1 && s.starts_with('0'))
        {
            return Err(ErrorKind::ParsePortError(s.to_string()).into());
        }
        match u16::from_str(s) {
            Ok(port) => Ok(Self(port)),
            Err(_) => Err(ErrorKind::ParsePortError(s.to_string()).into()),
        }
    }
}

impl From<u16> for Port {
    fn from(v: u16) -> Self {
        Self(v)
    }
}

impl Port {
    ///
    /// Construct a new `Port` instance from the raw port value.
    ///
    pub fn new(raw_port: u16) -> Self {
        Self(raw_port)
    }

    /// Return the raw port value.
    pub fn value(&self) -> u16 {
        self.0
    }
}

// ------------------------------------------------------------------------------------------------

impl Display for HostKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HostKind::DomainName(name) => write!(f, "{}", name),
            HostKind::Ipv4(address) => write!(f, "{}", address),
            HostKind::Ipv6(address) => write!(f, "[{}]", address),
            HostKind::IpvFuture(version, address) => write!(f, "[v{:X}.{}]", version, address),
        }
    }
}

impl Normalize for HostKind {
    fn normalize(self) -> UriResult<Self> {
        Ok(match self {
            HostKind::IpvFuture(version, address) => {
                HostKind::IpvFuture(version, address.to_uppercase())
            }
            _ => self,
        })
    }
}

// ------------------------------------------------------------------------------------------------

impl Display for Host {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Host {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Err(ErrorKind::ParseHostError(s.to_string()).into())
        } else if let Some(inner) = s.strip_prefix('[') {
            match inner.strip_suffix(']') {
                Some(literal) => parse_ip_literal(literal),
                None => Err(ErrorKind::ParseHostError(s.to_string()).into()),
            }
        } else if parse::is_strict_ipv4(s) {
            let address = s
                .parse()
                .map_err(|_| UriError::from(ErrorKind::ParseIpAddressError(s.to_string())))?;
            Ok(Self(HostKind::Ipv4(address)))
        } else {
            Self::new_domain_name(s)
        }
    }
}

impl ValidateStr for Host {}

impl Normalize for Host {
    fn normalize(self) -> UriResult<Self> {
        self.0.normalize().map(Self)
    }
}

impl Host {
    ///
    /// Construct a new `Host` if `name` is a valid registered name. ASCII
    /// characters are lowercased, percent-triplets are uppercased, and a
    /// name containing non-ASCII characters is converted to its A-label
    /// (`xn--…`) form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use uritk_core::Host;
    ///
    /// let host = Host::new_domain_name("WWW.Example.COM").unwrap();
    ///
    /// assert!(host.is_domain_name());
    /// assert_eq!(host.to_string(), "www.example.com");
    /// ```
    ///
    pub fn new_domain_name(name: &str) -> UriResult<Self> {
        if name.is_empty() || !parse::is_reg_name(name) {
            return Err(ErrorKind::ParseHostError(name.to_string()).into());
        }
        let ascii = if name.is_ascii() {
            name.to_ascii_lowercase()
        } else {
            idna::domain_to_ascii(name)
                .map_err(|_| UriError::from(ErrorKind::ParseHostError(name.to_string())))?
        };
        let canonical = pct::encode(&ascii, Region::RegName, true)?;
        Ok(Self(HostKind::DomainName(canonical)))
    }

    ///
    /// Construct a new `Host` from an IPv4 address.
    ///
    pub fn new_ipv4_address(address: Ipv4Addr) -> Self {
        Self(HostKind::Ipv4(address))
    }

    ///
    /// Construct a new `Host` from an IPv6 address.
    ///
    pub fn new_ipv6_address(address: Ipv6Addr) -> Self {
        Self(HostKind::Ipv6(address))
    }

    ///
    /// Construct a new `Host` if `address` is a valid IP future address
    /// representation.
    ///
    pub fn new_ipv_future_address(version: u16, address: &str) -> UriResult<Self> {
        if parse::is_ipv_future_tail(address) {
            Ok(Self(HostKind::IpvFuture(version, address.to_string())))
        } else {
            Err(ErrorKind::ParseIpAddressError(address.to_string()).into())
        }
    }

    /// Returns `true` if this is a named host, else `false`.
    pub fn is_domain_name(&self) -> bool {
        matches!(&self.0, HostKind::DomainName(_))
    }

    /// Returns `true` if this is an IPv4 address, else `false`.
    pub fn is_ipv4_address(&self) -> bool {
        matches!(&self.0, HostKind::Ipv4(_))
    }

    /// Returns `true` if this is an IPv6 address, else `false`.
    pub fn is_ipv6_address(&self) -> bool {
        matches!(&self.0, HostKind::Ipv6(_))
    }

    /// Returns `true` if this is an IPvFuture address, else `false`.
    pub fn is_ip_future_address(&self) -> bool {
        matches!(&self.0, HostKind::IpvFuture(_, _))
    }

    ///
    /// Return the enumeration that contains the actual host value.
    ///
    pub fn value(&self) -> &HostKind {
        &self.0
    }
}

// ------------------------------------------------------------------------------------------------

impl Display for UserInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.user)?;
        if let Some(password) = &self.password {
            write!(f, ":{}", password)?;
        }
        write!(f, "@")
    }
}

impl FromStr for UserInfo {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None => Ok(Self {
                user: pct::encode(s, Region::UserInfo, true)?,
                password: None,
            }),
            Some((user, password)) => Ok(Self {
                user: pct::encode(user, Region::UserInfo, true)?,
                password: Some(pct::encode(password, Region::UserInfo, true)?),
            }),
        }
    }
}

impl UserInfo {
    ///
    /// Construct a new `UserInfo` instance with only the user specified.
    ///
    pub fn new(user: &str) -> UriResult<Self> {
        Ok(Self {
            user: pct::encode(user, Region::UserInfo, false)?,
            password: None,
        })
    }

    ///
    /// Construct a new `UserInfo` instance with both user and password.
    ///
    pub fn new_with_password(user: &str, password: &str) -> UriResult<Self> {
        Ok(Self {
            user: pct::encode(user, Region::UserInfo, false)?,
            password: Some(pct::encode(password, Region::UserInfo, false)?),
        })
    }

    ///
    /// Return the user, in percent-encoded form.
    ///
    pub fn user(&self) -> &str {
        &self.user
    }

    ///
    /// Return `true` if this instance has a password, else `false`.
    ///
    pub fn has_password(&self) -> bool {
        self.password.is_some()
    }

    ///
    /// Return the password in this instance, if present.
    ///
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

// ------------------------------------------------------------------------------------------------

impl Display for Authority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "//")?;
        if let Some(user_info) = &self.user_info {
            write!(f, "{}", user_info)?;
        }
        write!(f, "{}", self.host)?;
        if let Some(port) = &self.port {
            write!(f, "{}", port)?;
        }
        Ok(())
    }
}

impl FromStr for Authority {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_authority(s)
    }
}

impl ValidateStr for Authority {}

impl Normalize for Authority {
    fn normalize(self) -> UriResult<Self> {
        Ok(Self {
            host: self.host.normalize()?,
            ..self
        })
    }
}

impl Authority {
    ///
    /// Construct a new `Authority` instance with only the specified `Host`
    /// value. The host is required, other sub-components are optional.
    ///
    pub fn new(host: Host) -> Self {
        Self {
            host,
            user_info: None,
            port: None,
        }
    }

    ///
    /// Construct a new `Authority` instance with the required `Host` value
    /// and a `Port` value.
    ///
    pub fn new_with_port(host: Host, port: Port) -> Self {
        Self {
            host,
            user_info: None,
            port: Some(port),
        }
    }

    ///
    /// Construct a new `Authority` instance with the required `Host` value
    /// and a `UserInfo` value.
    ///
    pub fn new_with_user_info(host: Host, user_info: UserInfo) -> Self {
        Self {
            host,
            user_info: Some(user_info),
            port: None,
        }
    }

    ///
    /// Construct a new `Authority` instance with the required `Host` value,
    /// a `Port` value, and a `UserInfo` value.
    ///
    pub fn new_with_port_and_user_info(host: Host, port: Port, user_info: UserInfo) -> Self {
        Self {
            host,
            user_info: Some(user_info),
            port: Some(port),
        }
    }

    /// Return the current host value.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Return `true` if this authority has a port value, else `false`.
    pub fn has_port(&self) -> bool {
        self.port.is_some()
    }

    /// Return the current port value, if present.
    pub fn port(&self) -> Option<Port> {
        self.port
    }

    /// Return the current user info value, if present.
    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    /// Return `true` if this authority has a user info value, else `false`.
    pub fn has_user_info(&self) -> bool {
        self.user_info.is_some()
    }

    /// Return a copy with the host replaced.
    pub fn with_host(&self, host: Host) -> Self {
        Self {
            host,
            ..self.clone()
        }
    }

    /// Return a copy with the port replaced or removed.
    pub fn with_port(&self, port: Option<Port>) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }

    /// Return a copy with the user info replaced or removed.
    pub fn with_user_info(&self, user_info: Option<UserInfo>) -> Self {
        Self {
            user_info,
            ..self.clone()
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn parse_ip_literal(literal: &str) -> UriResult<Host> {
    if let Some(tail) = literal.strip_prefix(['v', 'V']) {
        match tail.split_once('.') {
            Some((version, address)) if !version.is_empty() => {
                let version = u16::from_str_radix(version, 16).map_err(|_| {
                    UriError::from(ErrorKind::ParseIpAddressError(literal.to_string()))
                })?;
                Host::new_ipv_future_address(version, address)
            }
            _ => Err(ErrorKind::ParseIpAddressError(literal.to_string()).into()),
        }
    } else {
        let address = literal
            .parse::<Ipv6Addr>()
            .map_err(|_| UriError::from(ErrorKind::ParseIpAddressError(literal.to_string())))?;
        Ok(Host::new_ipv6_address(address))
    }
}

fn parse_authority(s: &str) -> UriResult<Authority> {
    let (user_info, rest) = match s.split_once('@') {
        Some((user_info, rest)) => {
            let user_info = UserInfo::from_str(user_info)
                .chain_err(|| ErrorKind::ParseUserInfoError(user_info.to_string()))?;
            (Some(user_info), rest)
        }
        None => (None, s),
    };
    if rest.contains('@') {
        return Err(ErrorKind::ParseAuthorityError(s.to_string()).into());
    }
    let (host, port) = if rest.starts_with('[') {
        match rest.find(']') {
            Some(end) => {
                let host = &rest[..=end];
                match &rest[end + 1..] {
                    "" => (host, None),
                    tail => match tail.strip_prefix(':') {
                        Some(port) => (host, Some(port)),
                        None => {
                            return Err(ErrorKind::ParseAuthorityError(s.to_string()).into());
                        }
                    },
                }
            }
            None => return Err(ErrorKind::ParseHostError(rest.to_string()).into()),
        }
    } else {
        match rest.rsplit_once(':') {
            Some((host, port)) => (host, Some(port)),
            None => (rest, None),
        }
    };
    let host = Host::from_str(host)?;
    // An empty port string after ":" is tolerated and dropped.
    let port = match port {
        None | Some("") => None,
        Some(port) => Some(Port::from_str(port)?),
    };
    Ok(Authority {
        user_info,
        host,
        port,
    })
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
