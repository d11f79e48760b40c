use crate::data::slots::{DestinationCategory, FONT_PATH_KEY};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

include!("settings/ini.rs");
include!("settings/store.rs");
include!("settings/paths.rs");
