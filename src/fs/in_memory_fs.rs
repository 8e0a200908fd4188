//! In-Memory File System Implementation
//!
//! A recursive tree of directories and text files plus the shell's working
//! directory. Every lookup walks from the root; no live references into the
//! tree are held between operations.

use tracing::debug;

use super::types::*;

/// Name of the directory holding per-user homes.
pub const HOME_DIR: &str = "home";

const MOTD: &str = "Have a productive day on TerminalOS v1.0!";

/// In-memory virtual file system.
#[derive(Debug, Clone)]
pub struct VirtualFs {
    root: Node,
    current_path: Vec<String>,
}

impl VirtualFs {
    /// Create the default layout: `/home`, `/etc/motd.txt`, `/tmp`, `/bin`.
    pub fn new() -> Self {
        let mut etc = Entries::new();
        etc.insert("motd.txt".to_string(), Node::file(MOTD));

        let mut root = Entries::new();
        root.insert(HOME_DIR.to_string(), Node::empty_dir());
        root.insert("etc".to_string(), Node::Directory(etc));
        root.insert("tmp".to_string(), Node::empty_dir());
        root.insert("bin".to_string(), Node::empty_dir());

        Self {
            root: Node::Directory(root),
            current_path: Vec::new(),
        }
    }

    /// Create a filesystem holding nothing but the root directory.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            root: Node::empty_dir(),
            current_path: Vec::new(),
        }
    }

    /// Render the working directory as `/a/b`, or `/` at the root.
    pub fn path_string(&self) -> String {
        if self.current_path.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.current_path.join("/"))
        }
    }

    /// Walk from the root following `segments`.
    ///
    /// Returns `None` if a segment is missing or an intermediate segment is a file.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Node> {
        let mut node = &self.root;
        for segment in segments {
            node = match node {
                Node::Directory(entries) => entries.get(segment.as_ref())?,
                Node::File(_) => return None,
            };
        }
        Some(node)
    }

    fn resolve_mut<S: AsRef<str>>(&mut self, segments: &[S]) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for segment in segments {
            node = match node {
                Node::Directory(entries) => entries.get_mut(segment.as_ref())?,
                Node::File(_) => return None,
            };
        }
        Some(node)
    }

    /// Entries of the working directory, if the current path still resolves to one.
    pub fn current_directory(&self) -> Option<&Entries> {
        match self.resolve(&self.current_path) {
            Some(Node::Directory(entries)) => Some(entries),
            _ => None,
        }
    }

    fn current_directory_mut(&mut self) -> Result<&mut Entries, FsError> {
        let path = self.current_path.clone();
        match self.resolve_mut(&path) {
            Some(Node::Directory(entries)) => Ok(entries),
            _ => Err(FsError::CurrentDirectoryUnavailable),
        }
    }

    /// Enter the child directory `target`, or the parent for `..`.
    ///
    /// The path is only reassigned once the new location is known to be a directory.
    pub fn change_directory(&mut self, target: &str) -> Result<(), FsError> {
        if target == ".." {
            return match self.current_path.pop() {
                Some(_) => Ok(()),
                None => Err(FsError::AlreadyAtRoot),
            };
        }

        let mut new_path = self.current_path.clone();
        new_path.push(target.to_string());

        match self.resolve(&new_path).map(Node::is_directory) {
            None => Err(FsError::DirectoryNotFound { name: target.to_string() }),
            Some(false) => Err(FsError::NotDirectory { name: target.to_string() }),
            Some(true) => {
                self.current_path = new_path;
                Ok(())
            }
        }
    }

    /// Split the working directory's entries into sorted directories and files.
    pub fn list_directory(&self) -> Result<Listing, FsError> {
        self.current_directory()
            .map(Listing::from)
            .ok_or(FsError::CurrentDirectoryUnavailable)
    }

    /// Create an empty directory `name` in the working directory.
    pub fn make_directory(&mut self, name: &str) -> Result<(), FsError> {
        self.insert_new(name, Node::empty_dir())?;
        debug!(name, cwd = %self.path_string(), "directory created");
        Ok(())
    }

    /// Create an empty file `name`. An existing entry of either kind is an error.
    pub fn touch_file(&mut self, name: &str) -> Result<(), FsError> {
        self.insert_new(name, Node::file(""))?;
        debug!(name, cwd = %self.path_string(), "file created");
        Ok(())
    }

    fn insert_new(&mut self, name: &str, node: Node) -> Result<(), FsError> {
        let entries = self.current_directory_mut()?;
        if entries.contains_key(name) {
            return Err(FsError::AlreadyExists { name: name.to_string() });
        }
        entries.insert(name.to_string(), node);
        Ok(())
    }

    /// Content of the file `name` in the working directory.
    pub fn read_file(&self, name: &str) -> Result<&str, FsError> {
        let entries = self
            .current_directory()
            .ok_or(FsError::CurrentDirectoryUnavailable)?;
        match entries.get(name) {
            None => Err(FsError::FileNotFound { name: name.to_string() }),
            Some(Node::Directory(_)) => Err(FsError::IsDirectory { name: name.to_string() }),
            Some(Node::File(content)) => Ok(content.as_str()),
        }
    }

    /// Create or fully overwrite the file `name` with `content`.
    pub fn write_file(&mut self, name: &str, content: impl Into<String>) -> Result<(), FsError> {
        let entries = self.current_directory_mut()?;
        if let Some(Node::Directory(_)) = entries.get(name) {
            return Err(FsError::IsDirectory { name: name.to_string() });
        }
        let content = content.into();
        let bytes = content.len();
        entries.insert(name.to_string(), Node::File(content));
        debug!(name, bytes, cwd = %self.path_string(), "file written");
        Ok(())
    }

    /// Make sure `/home/<username>` exists and make it the working directory.
    ///
    /// A newly created home is seeded with `notes.txt` and an empty `projects`
    /// directory; an existing home is left as it is.
    pub fn ensure_home(&mut self, username: &str) -> Result<(), FsError> {
        let Node::Directory(root) = &mut self.root else {
            return Err(FsError::CurrentDirectoryUnavailable);
        };
        let Node::Directory(homes) = root
            .entry(HOME_DIR.to_string())
            .or_insert_with(Node::empty_dir)
        else {
            return Err(FsError::NotDirectory { name: HOME_DIR.to_string() });
        };

        if !homes.contains_key(username) {
            let mut home = Entries::new();
            home.insert(
                "notes.txt".to_string(),
                Node::file(format!(
                    "Welcome, {}!\nThis is your personal notes file.",
                    username
                )),
            );
            home.insert("projects".to_string(), Node::empty_dir());
            homes.insert(username.to_string(), Node::Directory(home));
            debug!(username, "home directory created");
        }

        self.enter_home(username)
    }

    /// Jump to `/home/<username>`.
    pub fn enter_home(&mut self, username: &str) -> Result<(), FsError> {
        let home = [HOME_DIR, username];
        match self.resolve(&home).map(Node::is_directory) {
            Some(true) => {
                self.current_path = home.iter().map(|s| s.to_string()).collect();
                Ok(())
            }
            Some(false) => Err(FsError::NotDirectory { name: username.to_string() }),
            None => Err(FsError::DirectoryNotFound { name: username.to_string() }),
        }
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::new()
    }
}
