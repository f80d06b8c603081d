mod box_mesh_box_mesh;
mod concurrent_queries;
mod contact_filter;
mod mesh_approximation;
mod traversal_soundness;
