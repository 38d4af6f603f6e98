pub mod shared {
    pub mod infrastructure {
        pub mod document_store;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod employee_id;
        }
        pub mod use_cases {
            pub mod list_employees {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod employee_store;
                pub mod employee_store_in_memory;
                pub mod employee_store_mongo;
            }
        }
    }
}

pub mod shell;
