mod ingest;
mod summary;
