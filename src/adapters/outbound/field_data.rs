use crate::common::DomainError;
use crate::common::DomainResult;
use crate::domains::flight_planning::ports::FieldBoundarySource;
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct FilesystemBoundarySource {
    base: PathBuf,
}

impl FilesystemBoundarySource {
    pub fn new(base: Option<PathBuf>) -> Self {
        let base = base.unwrap_or_else(|| {
            if let Ok(v) = env::var("FLIGHT_PLANNING_DATA_DIR") {
                PathBuf::from(v)
            } else {
                let cwd_default = Path::new("resources/flight_planning");
                if cwd_default.exists() {
                    cwd_default.to_path_buf()
                } else {
                    PathBuf::from("/usr/share/kestrel-app/flight_planning")
                }
            }
        });
        Self { base }
    }
}

impl FieldBoundarySource for FilesystemBoundarySource {
    fn load_boundary_geojson(&self, name: &str) -> DomainResult<String> {
        let mut p = self.base.clone();
        p.push("boundaries");
        p.push(name);
        let mut s = String::new();
        let mut f = fs::File::open(&p)
            .map_err(|e| DomainError::InfrastructureError(format!("{}", e)))?;
        f.read_to_string(&mut s)
            .map_err(|e| DomainError::InfrastructureError(format!("{}", e)))?;
        Ok(s)
    }
}
