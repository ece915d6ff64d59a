//! Allow-list of intranet and custom host names.

use std::collections::HashSet;

/// Hosts that resolve outside public DNS and skip suffix validation.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalHosts {
    names: HashSet<String>,
}

impl LocalHosts {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_ascii_lowercase())
            .filter(|n| !n.is_empty())
            .collect();

        Self { names }
    }

    /// An allow-list with no entries at all.
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Parse `/etc/hosts`-style text: an address followed by host names.
    ///
    /// Comments after `#` are ignored; `localhost` is always included.
    pub fn from_hosts_file(contents: &str) -> Self {
        let mut hosts = Self::default();
        for line in contents.lines() {
            let line = line.split('#').next().unwrap_or("");
            let mut fields = line.split_whitespace();
            if fields.next().is_none() {
                continue;
            }
            hosts
                .names
                .extend(fields.map(|name| name.to_ascii_lowercase()));
        }
        hosts
    }

    /// Merge extra names into the allow-list.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names.extend(Self::new(names).names);
    }

    pub fn contains(&self, host: &str) -> bool {
        self.names.contains(host)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for LocalHosts {
    fn default() -> Self {
        Self::new(["localhost"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_localhost() {
        assert!(LocalHosts::default().contains("localhost"));
        assert!(LocalHosts::empty().is_empty());
    }

    #[test]
    fn test_hosts_file_parsing() {
        let hosts = LocalHosts::from_hosts_file(
            "# static table\n\
             127.0.0.1   localhost\n\
             10.0.0.5    NAS nas.home   # storage box\n\
             \n\
             ::1 ip6-localhost\n",
        );

        assert!(hosts.contains("localhost"));
        assert!(hosts.contains("nas"));
        assert!(hosts.contains("nas.home"));
        assert!(hosts.contains("ip6-localhost"));
        assert!(!hosts.contains("storage"));
        assert!(!hosts.contains("10.0.0.5"));
    }

    #[test]
    fn test_extend() {
        let mut hosts = LocalHosts::empty();
        hosts.extend(["Intranet"]);
        assert!(hosts.contains("intranet"));
        assert_eq!(hosts.len(), 1);
    }
}
