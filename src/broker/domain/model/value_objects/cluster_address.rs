use std::{collections::BTreeMap, fmt};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::{Url, form_urlencoded};

use crate::broker::domain::model::enums::broker_domain_error::BrokerDomainError;

/// User-info escaping as MongoDB drivers and Go's `url.UserPassword` expect:
/// unreserved characters and `$&+,;=` pass through, everything else is escaped.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b',')
    .remove(b';')
    .remove(b'=');

/// A MongoDB address split into URI components.
///
/// `Url` rejects seed lists such as `host1:27017,host2:27017`, so the
/// authority is split here and every seed host is validated on its own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClusterAddress {
    scheme: String,
    userinfo: Option<String>,
    hosts: String,
    path: String,
    raw_query: Option<String>,
    fragment: Option<String>,
}

impl ClusterAddress {
    pub fn parse(address: &str) -> Result<Self, BrokerDomainError> {
        let invalid = |source| BrokerDomainError::InvalidBackendAddress {
            address: address.to_string(),
            source,
        };

        let (scheme, rest) = address
            .split_once("://")
            .ok_or_else(|| invalid(url::ParseError::RelativeUrlWithoutBase))?;

        let (rest, fragment) = match rest.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (rest, None),
        };
        let (rest, raw_query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query.to_string())),
            None => (rest, None),
        };
        let (authority, path) = match rest.find('/') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };
        let (userinfo, hosts) = match authority.rsplit_once('@') {
            Some((userinfo, hosts)) => (Some(userinfo.to_string()), hosts),
            None => (None, authority),
        };

        if hosts.is_empty() {
            return Err(invalid(url::ParseError::EmptyHost));
        }

        for host in hosts.split(',') {
            if host.is_empty() {
                return Err(invalid(url::ParseError::EmptyHost));
            }
            Url::parse(&format!("{scheme}://{host}")).map_err(invalid)?;
        }

        Ok(Self {
            scheme: scheme.to_string(),
            userinfo,
            hosts: hosts.to_string(),
            path: path.to_string(),
            raw_query,
            fragment,
        })
    }

    pub fn set_credentials(&mut self, username: &str, password: &str) {
        self.userinfo = Some(format!(
            "{}:{}",
            utf8_percent_encode(username, USERINFO),
            utf8_percent_encode(password, USERINFO)
        ));
    }

    pub fn set_path(&mut self, path: &str) {
        self.path = path.to_string();
    }

    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Sets each pair on the query, replacing every existing value of the key,
    /// and re-encodes the query with keys sorted.
    pub fn merge_query<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut values: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (key, value) in form_urlencoded::parse(self.raw_query.as_deref().unwrap_or("").as_bytes())
        {
            values
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        for (key, value) in pairs {
            values.insert(key, vec![value]);
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, key_values) in &values {
            for value in key_values {
                serializer.append_pair(key, value);
            }
        }

        self.raw_query = Some(serializer.finish());
    }
}

impl fmt::Display for ClusterAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;
        if let Some(userinfo) = &self.userinfo {
            write!(f, "{userinfo}@")?;
        }
        f.write_str(&self.hosts)?;
        if !self.path.is_empty() {
            if !self.path.starts_with('/') {
                f.write_str("/")?;
            }
            f.write_str(&self.path)?;
        }
        if let Some(query) = self.raw_query.as_deref().filter(|query| !query.is_empty()) {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}
