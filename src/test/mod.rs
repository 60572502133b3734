mod test_heuristics;
mod test_level_manager;
