mod coverage;
mod workers;
