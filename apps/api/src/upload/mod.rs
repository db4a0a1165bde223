// Upload state: resume selection and the job description.
// Every operation here is pure over the current lists and returns a new value plus notices.

pub mod files;
pub mod handlers;
pub mod job_description;
